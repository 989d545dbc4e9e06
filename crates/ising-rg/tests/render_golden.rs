use ising_rg::render::{render_equations, render_table, TABLE_HEADER};
use ising_rg::renormalize;

const EQUATIONS: &str = "Exp[A(k)+2k'] = 14 Exp[-2 k]+ 16 Exp[2 k]+ 2 Exp[6 k]\n\
Exp[A(k)-2k'] = 2 Exp[-6 k]+ 16 Exp[-2 k]+ 14 Exp[2 k]\n";

#[test]
fn equations_match_golden() {
    let run = renormalize();
    assert_eq!(render_equations(run.table()), EQUATIONS);
}

#[test]
fn table_has_header_and_sixty_four_rows() {
    let run = renormalize();
    let table = render_table(&run);
    assert!(table.ends_with('\n'));
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 65);
    assert_eq!(lines[0], TABLE_HEADER);
    assert_eq!(lines[0], "s1 s2 s3\t s1'\ts4 s5 s6\ts2'\t\tH\t  H'");
}

#[test]
fn table_rows_follow_enumeration_order() {
    let run = renormalize();
    let table = render_table(&run);
    let lines: Vec<&str> = table.lines().skip(1).collect();
    assert_eq!(lines[0], " -1 -1 -1\t -1\t -1 -1 -1\t -1\t\t  6\t  2");
    assert_eq!(lines[1], " -1 -1 -1\t -1\t -1 -1  1\t -1\t\t  2\t  2");
    assert_eq!(lines[42], "  1 -1  1\t  1\t -1  1 -1\t -1\t\t -6\t -2");
    assert_eq!(lines[63], "  1  1  1\t  1\t  1  1  1\t  1\t\t  6\t  2");

    for line in &lines {
        let columns: Vec<&str> = line.split('\t').collect();
        assert_eq!(columns.len(), 7, "unexpected layout: {line:?}");
        assert_eq!(columns[4], "");
    }
}
