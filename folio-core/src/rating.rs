use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self) -> AvgRatingValue;
}

impl Rated for [Comment] {
    fn avg_rating(&self) -> AvgRatingValue {
        self.iter()
            .filter_map(|c| c.rating)
            .fold(AvgRatingValueBuilder::default(), |mut acc, r| {
                acc += r;
                acc
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_comment(id: &str, rating: Option<u8>) -> Comment {
        Comment {
            id: id.into(),
            created_at: Timestamp::now(),
            name: "blubb".into(),
            email: EmailAddress::new_unchecked("blubb@bar.tld".into()),
            message: "blabla".into(),
            rating: rating.map(RatingValue::new),
        }
    }

    #[test]
    fn test_average_rating() {
        let comments = [
            new_comment("a", Some(4)),
            new_comment("b", Some(5)),
            new_comment("c", Some(1)),
        ];
        assert_eq!(comments.avg_rating(), (10.0 / 3.0).into());
    }

    #[test]
    fn test_average_rating_skips_unrated() {
        let comments = [
            new_comment("a", Some(2)),
            new_comment("b", None),
            new_comment("c", Some(4)),
            new_comment("d", None),
        ];
        assert_eq!(comments.avg_rating(), 3.0.into());
    }

    #[test]
    fn test_average_rating_of_empty_set() {
        let comments: [Comment; 0] = [];
        assert_eq!(comments.avg_rating(), 0.0.into());
    }

    #[test]
    fn test_average_rating_without_rated_comments() {
        let comments = [new_comment("a", None), new_comment("b", None)];
        assert_eq!(comments.avg_rating(), 0.0.into());
    }
}
