use ising_core::Spin;
use ising_rg::{ring_energy, try_ring_energy};
use proptest::prelude::*;

fn spin() -> impl Strategy<Value = Spin> {
    prop_oneof![Just(Spin::Up), Just(Spin::Down)]
}

#[test]
fn six_site_wrap_around() {
    use Spin::{Down, Up};
    assert_eq!(ring_energy(&[Up; 6]), 6);
    assert_eq!(ring_energy(&[Down; 6]), 6);
    assert_eq!(ring_energy(&[Up, Down, Up, Down, Up, Down]), -6);
    // Without the s6-s1 bond this would be 3.
    assert_eq!(ring_energy(&[Down, Up, Up, Up, Up, Up]), 2);
}

#[test]
fn two_site_ring_doubles_the_bond() {
    for first in Spin::ALL {
        for second in Spin::ALL {
            let expected = 2 * first.value() * second.value();
            assert_eq!(ring_energy(&[first, second]), expected);
            assert_eq!(try_ring_energy(&[first, second]).unwrap(), expected);
        }
    }
}

proptest! {
    #[test]
    fn reversal_preserves_energy(ring in prop::collection::vec(spin(), 2..16)) {
        let mut reversed = ring.clone();
        reversed.reverse();
        prop_assert_eq!(try_ring_energy(&ring).unwrap(), try_ring_energy(&reversed).unwrap());
    }

    #[test]
    fn rotation_preserves_energy(ring in prop::collection::vec(spin(), 2..16), shift in 0usize..16) {
        let mut rotated = ring.clone();
        rotated.rotate_left(shift % ring.len());
        prop_assert_eq!(try_ring_energy(&ring).unwrap(), try_ring_energy(&rotated).unwrap());
    }

    #[test]
    fn energy_parity_matches_length(ring in prop::collection::vec(spin(), 2..16)) {
        let energy = try_ring_energy(&ring).unwrap();
        prop_assert!(energy.abs() <= ring.len() as i32);
        // Domain walls come in pairs on a ring.
        prop_assert_eq!((ring.len() as i32 - energy) % 4, 0);
    }

    #[test]
    fn fixed_and_slice_forms_agree(ring in prop::array::uniform6(spin())) {
        prop_assert_eq!(ring_energy(&ring), try_ring_energy(&ring).unwrap());
    }
}
