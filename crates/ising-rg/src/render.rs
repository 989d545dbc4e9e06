use std::fmt::Write;

use crate::aggregate::{ExponentCounts, GroupedExponentTable, SpinRelation};
use crate::{RenormRow, RenormRun};

/// Header line of the raw configuration table.
pub const TABLE_HEADER: &str = "s1 s2 s3\t s1'\ts4 s5 s6\ts2'\t\tH\t  H'";

/// Renders one table row: `s1 s2 s3 | s1' | s4 s5 s6 | s2' | H | H'`.
pub fn render_row(row: &RenormRow) -> String {
    let [s1, s2, s3, s4, s5, s6] = *row.configuration().spins();
    let [b1, b2] = *row.blocks().spins();
    format!(
        "{s1:>3}{s2:>3}{s3:>3}\t{b1:>3}\t{s4:>3}{s5:>3}{s6:>3}\t{b2:>3}\t\t{:>3}\t{:>3}",
        row.h1(),
        row.h2()
    )
}

/// Renders the header and every row of `run`, each line newline terminated.
pub fn render_table(run: &RenormRun) -> String {
    let mut out = String::with_capacity(TABLE_HEADER.len() + 32 * (run.rows().len() + 1));
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for row in run.rows() {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Renders `<label> = <count> Exp[<H> k]+ ...` for a single class, without a newline.
pub fn render_equation(relation: SpinRelation, counts: &ExponentCounts) -> String {
    let mut out = format!("{} = ", relation.label());
    for (idx, (exponent, count)) in counts.iter().enumerate() {
        if idx > 0 {
            out.push_str("+ ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{count} Exp[{exponent} k]");
    }
    out
}

/// Renders both coupling equations, equal class first.
pub fn render_equations(table: &GroupedExponentTable) -> String {
    let mut out = String::new();
    for relation in SpinRelation::ALL {
        out.push_str(&render_equation(relation, table.class(relation)));
        out.push('\n');
    }
    out
}
