//! Featured selection and aggregate statistics over testimonials.

use renoovy_core::Entity;

use crate::testimonial::Testimonial;

/// How many testimonials the landing page features by default.
pub const DEFAULT_FEATURED_LIMIT: usize = 4;

/// Active, high-rating testimonials in display order, at most `limit`.
///
/// Order: verified first, then rating descending, then newest first. The sort
/// is stable, so full ties keep their input order.
pub fn featured_testimonials(testimonials: &[Testimonial], limit: usize) -> Vec<&Testimonial> {
    let mut featured: Vec<&Testimonial> = testimonials
        .iter()
        .filter(|t| t.is_active() && t.is_high_rating())
        .collect();

    featured.sort_by(|a, b| {
        b.is_verified()
            .cmp(&a.is_verified())
            .then_with(|| b.rating().cmp(&a.rating()))
            .then_with(|| b.created_at().cmp(&a.created_at()))
    });
    featured.truncate(limit);
    featured
}

/// Mean rating of active testimonials, rounded to one decimal; `0.0` when none.
pub fn average_rating(testimonials: &[Testimonial]) -> f64 {
    let (sum, count) = testimonials
        .iter()
        .filter(|t| t.is_active())
        .fold((0u64, 0u64), |(sum, count), t| {
            (sum + u64::from(t.rating().value()), count + 1)
        });

    if count == 0 {
        return 0.0;
    }

    let mean = sum as f64 / count as f64;
    (mean * 10.0).round() / 10.0
}

/// Number of active testimonials.
pub fn total_reviews(testimonials: &[Testimonial]) -> usize {
    testimonials.iter().filter(|t| t.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use renoovy_core::Rating;

    use crate::testimonial::{NewTestimonial, TestimonialId};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn testimonial(id: &str, rating: i64, verified: bool, days: i64) -> Testimonial {
        let mut data = NewTestimonial::new(
            TestimonialId::parse(id).unwrap(),
            "Cliente Renoovy",
            "Resultado visível em poucas semanas.",
            Rating::new(rating).unwrap(),
            base_time() + Duration::days(days),
        );
        data.is_verified = verified;
        Testimonial::new(data).unwrap()
    }

    fn ids(selected: &[&Testimonial]) -> Vec<String> {
        selected.iter().map(|t| t.id().to_string()).collect()
    }

    #[test]
    fn featured_orders_verified_then_rating_and_drops_low_ratings() {
        let testimonials = vec![
            testimonial("five_verified", 5, true, 0),
            testimonial("three", 3, false, 0),
            testimonial("five_unverified", 5, false, 0),
            testimonial("four", 4, false, 0),
        ];

        let featured = featured_testimonials(&testimonials, 2);
        assert_eq!(ids(&featured), vec!["five_verified", "five_unverified"]);

        let all = featured_testimonials(&testimonials, DEFAULT_FEATURED_LIMIT);
        assert_eq!(ids(&all), vec!["five_verified", "five_unverified", "four"]);
    }

    #[test]
    fn rating_four_follows_verified_when_other_fives_are_inactive() {
        let testimonials = vec![
            testimonial("five_verified", 5, true, 0),
            testimonial("three", 3, false, 0),
            testimonial("five_unverified", 5, false, 0).deactivate(),
            testimonial("four", 4, false, 0),
        ];

        let featured = featured_testimonials(&testimonials, 2);
        assert_eq!(ids(&featured), vec!["five_verified", "four"]);
    }

    #[test]
    fn verified_beats_higher_rating() {
        let testimonials = vec![
            testimonial("five_unverified", 5, false, 0),
            testimonial("four_verified", 4, true, 0),
        ];

        let featured = featured_testimonials(&testimonials, 4);
        assert_eq!(ids(&featured), vec!["four_verified", "five_unverified"]);
    }

    #[test]
    fn newest_first_among_equals() {
        let testimonials = vec![
            testimonial("old", 5, true, 1),
            testimonial("new", 5, true, 30),
            testimonial("mid", 5, true, 10),
        ];

        let featured = featured_testimonials(&testimonials, 10);
        assert_eq!(ids(&featured), vec!["new", "mid", "old"]);
    }

    #[test]
    fn featured_with_zero_limit_is_empty() {
        let testimonials = vec![testimonial("a", 5, true, 0)];
        assert!(featured_testimonials(&testimonials, 0).is_empty());
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
        assert_eq!(total_reviews(&[]), 0);
    }

    #[test]
    fn average_ignores_inactive_testimonials() {
        let testimonials = vec![
            testimonial("a", 4, false, 0),
            testimonial("b", 5, false, 0),
            testimonial("c", 3, false, 0).deactivate(),
        ];

        assert_eq!(average_rating(&testimonials), 4.5);
        assert_eq!(total_reviews(&testimonials), 2);
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let testimonials = vec![
            testimonial("a", 5, false, 0),
            testimonial("b", 5, false, 0),
            testimonial("c", 4, false, 0),
        ];

        // 14 / 3 = 4.666..
        assert_eq!(average_rating(&testimonials), 4.7);
    }

    #[test]
    fn all_inactive_average_is_zero() {
        let testimonials = vec![testimonial("a", 5, true, 0).deactivate()];
        assert_eq!(average_rating(&testimonials), 0.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 300,
                ..ProptestConfig::default()
            })]

            /// Property: featured output is bounded, filtered and correctly ordered.
            #[test]
            fn featured_is_filtered_bounded_and_ordered(
                specs in prop::collection::vec(
                    (1i64..=5, any::<bool>(), any::<bool>(), 0i64..365),
                    0..20,
                ),
                limit in 0usize..8
            ) {
                let testimonials: Vec<Testimonial> = specs
                    .iter()
                    .enumerate()
                    .map(|(idx, (rating, verified, active, days))| {
                        let t = testimonial(&format!("t{idx}"), *rating, *verified, *days);
                        if *active { t } else { t.deactivate() }
                    })
                    .collect();

                let featured = featured_testimonials(&testimonials, limit);

                prop_assert!(featured.len() <= limit);
                for t in &featured {
                    prop_assert!(t.is_active() && t.rating().value() >= 4);
                }
                for pair in featured.windows(2) {
                    let key = |t: &Testimonial| (t.is_verified(), t.rating(), t.created_at());
                    prop_assert!(key(pair[0]) >= key(pair[1]));
                }
            }

            /// Property: the average stays within the rating bounds.
            #[test]
            fn average_is_within_bounds(ratings in prop::collection::vec(1i64..=5, 1..30)) {
                let testimonials: Vec<Testimonial> = ratings
                    .iter()
                    .enumerate()
                    .map(|(idx, r)| testimonial(&format!("t{idx}"), *r, false, 0))
                    .collect();

                let avg = average_rating(&testimonials);
                prop_assert!((1.0..=5.0).contains(&avg));
                prop_assert_eq!(total_reviews(&testimonials), ratings.len());
            }
        }
    }
}
