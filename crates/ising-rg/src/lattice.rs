use ising_core::errors::{ErrorInfo, IsingError};
use ising_core::Spin;

/// Number of sites on the fine ring.
pub const SITES: usize = 6;
/// Number of contiguous fine sites merged into one block spin.
pub const BLOCK_SIZE: usize = 3;
/// Number of block spins on the coarse ring.
pub const BLOCKS: usize = SITES / BLOCK_SIZE;
/// Size of the fine configuration space.
pub const CONFIGURATION_COUNT: usize = 1 << SITES;

/// One assignment of spins to the six fine sites, tagged with its enumeration index.
///
/// Bit 5 of the index (the most significant of six) is site `s1` and bit 0 is
/// site `s6`; a set bit is spin up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Configuration {
    index: u8,
    spins: [Spin; SITES],
}

impl Configuration {
    /// Decodes the configuration for `index`, which must lie in `0..64`.
    pub fn from_index(index: usize) -> Result<Self, IsingError> {
        if index >= CONFIGURATION_COUNT {
            let info = ErrorInfo::new("index-out-of-range", "configuration index exceeds 6 bits")
                .with_context("index", index.to_string())
                .with_context("limit", CONFIGURATION_COUNT.to_string());
            return Err(IsingError::Lattice(info));
        }
        Ok(Self::decode(index as u8))
    }

    /// Builds a configuration from explicit site values, recovering its index.
    pub fn from_spins(spins: [Spin; SITES]) -> Self {
        Self {
            index: encode(&spins),
            spins,
        }
    }

    pub(crate) fn decode(index: u8) -> Self {
        let spins = std::array::from_fn(|site| {
            let shift = SITES - 1 - site;
            Spin::from_bit((index >> shift) & 1 == 1)
        });
        Self { index, spins }
    }

    /// Enumeration index of the configuration.
    pub fn index(&self) -> usize {
        usize::from(self.index)
    }

    /// Site values `s1..s6` in ring order.
    pub fn spins(&self) -> &[Spin; SITES] {
        &self.spins
    }

    /// Splits the ring into its contiguous blocks, `[s1 s2 s3]` then `[s4 s5 s6]`.
    pub fn blocks(&self) -> [[Spin; BLOCK_SIZE]; BLOCKS] {
        std::array::from_fn(|block| {
            std::array::from_fn(|offset| self.spins[block * BLOCK_SIZE + offset])
        })
    }
}

/// Packs site values back into the enumeration index; inverse of the decode mapping.
pub fn encode(spins: &[Spin; SITES]) -> u8 {
    spins
        .iter()
        .fold(0u8, |acc, spin| (acc << 1) | u8::from(spin.as_bit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_significant_bit_is_first_site() {
        let config = Configuration::decode(0b100000);
        assert_eq!(config.spins()[0], Spin::Up);
        assert!(config.spins()[1..].iter().all(|spin| *spin == Spin::Down));

        let config = Configuration::decode(0b000001);
        assert_eq!(config.spins()[SITES - 1], Spin::Up);
        assert!(config.spins()[..SITES - 1]
            .iter()
            .all(|spin| *spin == Spin::Down));
    }

    #[test]
    fn blocks_are_contiguous_halves() {
        let config = Configuration::decode(0b110001);
        let [first, second] = config.blocks();
        assert_eq!(first, [Spin::Up, Spin::Up, Spin::Down]);
        assert_eq!(second, [Spin::Down, Spin::Down, Spin::Up]);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = Configuration::from_index(CONFIGURATION_COUNT).unwrap_err();
        assert_eq!(err.info().code, "index-out-of-range");
        assert!(Configuration::from_index(CONFIGURATION_COUNT - 1).is_ok());
    }
}
