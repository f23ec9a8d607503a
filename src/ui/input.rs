use crate::board::Cell;
use crate::error::Error;

/// Parse a three-digit `zyx` move string into a cell.
///
/// Each digit must be in `0..=3`. Surrounding whitespace is ignored.
pub fn parse_move(input: &str) -> Result<Cell, Error> {
    let trimmed = input.trim();
    let digits: Vec<u8> = trimmed
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    if digits.len() != 3 || trimmed.chars().count() != 3 {
        return Err(Error::InvalidCoordinate(trimmed.to_string()));
    }
    let (z, y, x) = (digits[0], digits[1], digits[2]);
    if z > 3 || y > 3 || x > 3 {
        return Err(Error::InvalidCoordinate(trimmed.to_string()));
    }
    Ok(Cell::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_moves() {
        assert_eq!(parse_move("000").unwrap(), Cell::new(0, 0, 0));
        assert_eq!(parse_move("333").unwrap(), Cell::new(3, 3, 3));
        assert_eq!(parse_move("123").unwrap(), Cell::new(3, 2, 1));
        assert_eq!(parse_move("  013 ").unwrap(), Cell::new(3, 1, 0));
    }

    #[test]
    fn test_parse_round_trips_display() {
        let cell = Cell::new(2, 0, 1);
        assert_eq!(parse_move(&cell.to_string()).unwrap(), cell);
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(parse_move("").is_err());
        assert!(parse_move("12").is_err());
        assert!(parse_move("1234").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_move("004").is_err());
        assert!(parse_move("400").is_err());
        assert!(parse_move("094").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(parse_move("abc").is_err());
        assert!(parse_move("1a3").is_err());
        assert!(parse_move("-12").is_err());
    }
}
