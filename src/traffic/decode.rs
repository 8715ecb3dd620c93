// src/traffic/decode.rs

//! Maps a measured bit-string back to traffic decisions.

use crate::core::{QTrafficError, Result, SIGNAL_TIMING_TABLE};

/// Intersections whose bit is `'1'`, in index order.
///
/// No adjacency or ordering between the selected intersections is enforced.
pub fn decode_path(bits: &str) -> Vec<usize> {
    bits.chars()
        .enumerate()
        .filter(|(_, bit)| *bit == '1')
        .map(|(i, _)| i)
        .collect()
}

/// Signal timing in seconds for every symbol of `bits`.
///
/// # Errors
/// `UnexpectedSymbol` for any character outside `'0'`, `'1'`, `'2'`.
pub fn decode_signals(bits: &str) -> Result<Vec<u32>> {
    bits.chars()
        .enumerate()
        .map(|(position, symbol)| {
            SIGNAL_TIMING_TABLE
                .iter()
                .find(|(key, _)| *key == symbol)
                .map(|(_, seconds)| *seconds)
                .ok_or(QTrafficError::UnexpectedSymbol { symbol, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_from_bits() {
        assert!(decode_path("000").is_empty());
        assert_eq!(decode_path("101"), vec![0, 2]);
        assert_eq!(decode_path("111"), vec![0, 1, 2]);
        assert!(decode_path("").is_empty());
    }

    #[test]
    fn signals_from_bits() -> Result<()> {
        assert_eq!(decode_signals("012")?, vec![20, 30, 60]);
        assert_eq!(decode_signals("110")?, vec![30, 30, 20]);
        Ok(())
    }

    #[test]
    fn unknown_signal_symbol_is_an_error() {
        match decode_signals("3") {
            Err(QTrafficError::UnexpectedSymbol { symbol, position }) => {
                assert_eq!(symbol, '3');
                assert_eq!(position, 0);
            }
            other => panic!("Expected UnexpectedSymbol, got {:?}", other),
        }
        assert!(matches!(
            decode_signals("01x"),
            Err(QTrafficError::UnexpectedSymbol { symbol: 'x', position: 2 })
        ));
    }
}
