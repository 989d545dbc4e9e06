use ising_core::Spin;
use ising_rg::{block_majority, majority_rule};

#[test]
fn all_three_spin_blocks() {
    let mut seen = Vec::new();
    for a in Spin::ALL {
        for b in Spin::ALL {
            for c in Spin::ALL {
                let sum = a.value() + b.value() + c.value();
                assert_ne!(sum, 0, "odd blocks never tie");
                let expected = if sum > 0 { Spin::Up } else { Spin::Down };
                assert_eq!(block_majority(&[a, b, c]), expected);
                assert_eq!(majority_rule(&[a, b, c]).unwrap(), expected);
                seen.push(expected);
            }
        }
    }
    assert_eq!(seen.len(), 8);
    assert_eq!(seen.iter().filter(|spin| **spin == Spin::Up).count(), 4);
    assert_eq!(seen.iter().filter(|spin| **spin == Spin::Down).count(), 4);
}

#[test]
fn named_cases() {
    use Spin::{Down, Up};
    assert_eq!(block_majority(&[Up, Up, Up]), Up);
    assert_eq!(block_majority(&[Down, Down, Down]), Down);
    assert_eq!(block_majority(&[Up, Up, Down]), Up);
    assert_eq!(block_majority(&[Down, Down, Up]), Down);
}

#[test]
fn zero_sum_is_not_positive() {
    use Spin::{Down, Up};
    assert_eq!(majority_rule(&[Up, Down]).unwrap(), Down);
    assert_eq!(majority_rule(&[Down, Up, Up, Down, Up, Down]).unwrap(), Down);
    assert_eq!(majority_rule(&[Up, Up, Down, Up]).unwrap(), Up);
}
