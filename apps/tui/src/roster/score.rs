use crate::domain::{Attribute, PlayerRecord, MAX_RATING};

/// Average rating as a percentage of the maximum, rounded half up.
pub fn score(record: &PlayerRecord) -> u32 {
    let total: u32 = record.ratings().iter().copied().map(u32::from).sum();
    let max_total = Attribute::ALL.len() as u32 * u32::from(MAX_RATING);
    (total * 100 + max_total / 2) / max_total
}

pub fn format_score(record: &PlayerRecord) -> String {
    format!("{}%", score(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn with_ratings(ratings: [u8; 10]) -> PlayerRecord {
        let mut record = PlayerRecord::uniform("Test", Position::Cb, 0);
        for (attribute, rating) in Attribute::ALL.into_iter().zip(ratings) {
            attribute.set(&mut record, rating);
        }
        record
    }

    #[test]
    fn uniform_ratings() {
        assert_eq!(score(&with_ratings([5; 10])), 100);
        assert_eq!(score(&with_ratings([1; 10])), 20);
        assert_eq!(score(&with_ratings([0; 10])), 0);
    }

    #[test]
    fn mixed_ratings() {
        assert_eq!(score(&with_ratings([5, 5, 5, 5, 5, 1, 1, 1, 1, 1])), 60);
        assert_eq!(score(&with_ratings([3, 4, 3, 4, 3, 4, 3, 4, 3, 4])), 70);
    }

    #[test]
    fn display_has_percent_suffix() {
        assert_eq!(format_score(&with_ratings([4; 10])), "80%");
    }
}
