use ising_core::errors::{ErrorInfo, IsingError};
use ising_core::Spin;

struct Ring<const N: usize>;

impl<const N: usize> Ring<N> {
    const OK: () = assert!(N >= 2, "a periodic ring needs at least two sites");
}

/// Nearest-neighbour energy of a periodic ring, `sum s_i * s_{i+1}` with the
/// last site coupled back to the first.
///
/// For a two-site ring each site neighbours the other on both sides, so the
/// energy is `2 * s1 * s2`.
pub fn ring_energy<const N: usize>(ring: &[Spin; N]) -> i32 {
    let () = Ring::<N>::OK;
    circular_sum(ring)
}

/// Slice form of [`ring_energy`]; rings shorter than two sites are rejected.
pub fn try_ring_energy(ring: &[Spin]) -> Result<i32, IsingError> {
    if ring.len() < 2 {
        let info = ErrorInfo::new("ring-too-short", "periodic energy needs at least two sites")
            .with_context("len", ring.len().to_string());
        return Err(IsingError::Lattice(info));
    }
    Ok(circular_sum(ring))
}

fn circular_sum(ring: &[Spin]) -> i32 {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(left, right)| left.value() * right.value())
        .sum()
}
