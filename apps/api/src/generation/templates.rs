//! Template fallback — canned replies used when the AI path is disabled or fails.
//!
//! Algorithm:
//! 1. tier = rating when it is 1..=5, otherwise 3
//! 2. pick one of the tier's three templates via the injected `RandomSource`
//! 3. append at most one contextual sentence, first match wins:
//!    "food" && rating >= 4, then "service" && rating >= 4, then rating <= 2

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};

const DEFAULT_TIER: u8 = 3;

pub const FOOD_COMPLIMENT: &str = " We're so glad you enjoyed our cuisine!";
pub const SERVICE_COMPLIMENT: &str = " Our team works hard to provide excellent service.";
pub const MAKE_IT_RIGHT: &str = " We'd love the opportunity to make this right.";

/// Templates indexed by `tier - 1`. `{business_name}` appears exactly once in each.
pub const TEMPLATES: [[&str; 3]; 5] = [
    [
        "We're truly sorry to hear about your disappointing experience at {business_name}. This is not the level of service we strive for, and we take your feedback very seriously. Please contact us directly so we can address your concerns and make this right.",
        "We sincerely apologize for falling short of your expectations at {business_name}. Your experience is not reflective of our values, and we'd like to make it right. Please reach out to us directly to discuss this further.",
        "Thank you for bringing this to our attention. We're genuinely sorry about your experience at {business_name} and want to make things right. Please contact us directly so we can address your concerns properly.",
    ],
    [
        "Thank you for bringing this to our attention. We're sorry your experience at {business_name} didn't meet your expectations. We take all feedback seriously and would appreciate the opportunity to discuss this further. Please contact us directly so we can make this right.",
        "We sincerely apologize that your visit to {business_name} wasn't up to our usual standards. Your feedback is important to us, and we'd like to make things right. Please reach out to us directly.",
        "Thank you for your honest feedback. We're disappointed to hear about your experience at {business_name} and would like to address your concerns personally. Please contact us so we can improve.",
    ],
    [
        "Thank you for your honest feedback about {business_name}. We appreciate you taking the time to share your experience. We're always looking for ways to improve and would love to welcome you back.",
        "Thanks for the review! We're glad you visited {business_name} and appreciate your feedback. We're constantly working to enhance our service and hope to exceed your expectations next time.",
        "Thank you for your review of {business_name}. We value all feedback as it helps us grow and improve. We'd love the chance to provide you with an even better experience in the future.",
    ],
    [
        "Thank you for the great 4-star review! We're so pleased you enjoyed your experience at {business_name}. We appreciate your feedback and look forward to serving you again.",
        "Thanks for the wonderful review! We're happy you had a positive experience at {business_name}. We're always working to improve and appreciate your support.",
        "Thank you for choosing {business_name} and for the lovely review! We're glad you enjoyed your visit and hope to see you again soon.",
    ],
    [
        "Thank you so much for the amazing 5-star review! We're thrilled you had such a wonderful experience at {business_name}. Your feedback means the world to us, and we can't wait to serve you again soon!",
        "Wow, thank you for the fantastic review! We're so happy you chose {business_name} and that we exceeded your expectations. We look forward to welcoming you back!",
        "Thank you for taking the time to leave such a wonderful review! We're delighted you had a great experience at {business_name}. See you again soon!",
    ],
];

// ────────────────────────────────────────────────────────────────────────────
// Randomness
// ────────────────────────────────────────────────────────────────────────────

/// Source of uniform template picks. Swap for a seeded or fixed source in tests.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for reproducible output.
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Template tier for a rating. Out-of-range ratings share the 3-star set.
pub fn tier_for(rating: u8) -> u8 {
    if (1..=5).contains(&rating) {
        rating
    } else {
        DEFAULT_TIER
    }
}

/// The three candidate replies for a rating, already interpolated.
pub fn candidates(business_name: &str, rating: u8) -> Vec<String> {
    TEMPLATES[usize::from(tier_for(rating) - 1)]
        .iter()
        .map(|t| t.replace("{business_name}", business_name))
        .collect()
}

/// Contextual sentence appended after the template, if any applies.
pub fn contextual_addition(review_text: &str, rating: u8) -> Option<&'static str> {
    let review_lower = review_text.to_lowercase();
    if review_lower.contains("food") && rating >= 4 {
        Some(FOOD_COMPLIMENT)
    } else if review_lower.contains("service") && rating >= 4 {
        Some(SERVICE_COMPLIMENT)
    } else if rating <= 2 {
        Some(MAKE_IT_RIGHT)
    } else {
        None
    }
}

/// Builds a fallback reply. Errors only if `random` returns an index out of range.
pub fn render_fallback(
    business_name: &str,
    review_text: &str,
    rating: u8,
    random: &dyn RandomSource,
) -> Result<String> {
    let mut set = candidates(business_name, rating);
    let len = set.len();
    let index = random.pick(len);
    if index >= len {
        return Err(anyhow!(
            "random source returned index {index} for {len} templates"
        ));
    }

    let mut reply = set.swap_remove(index);
    if let Some(addition) = contextual_addition(review_text, rating) {
        reply.push_str(addition);
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the same index.
    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn pick(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_every_tier_mentions_business_name() {
        for rating in 1..=5u8 {
            for _ in 0..10 {
                let reply =
                    render_fallback("Covington Dental Care", "fine", rating, &ThreadRandom).unwrap();
                assert!(!reply.is_empty());
                assert!(
                    reply.contains("Covington Dental Care"),
                    "rating {rating} reply missing name: {reply}"
                );
            }
        }
    }

    #[test]
    fn test_each_template_has_one_placeholder() {
        for tier in TEMPLATES.iter() {
            for template in tier {
                assert_eq!(template.matches("{business_name}").count(), 1);
            }
        }
    }

    #[test]
    fn test_random_pick_is_member_of_tier_set() {
        let expected = candidates("Tipton Auto Repair", 4);
        for _ in 0..20 {
            let reply = render_fallback("Tipton Auto Repair", "quick fix", 4, &ThreadRandom).unwrap();
            assert!(expected.contains(&reply), "unexpected reply: {reply}");
        }
    }

    #[test]
    fn test_out_of_range_rating_uses_tier_three() {
        assert_eq!(tier_for(0), 3);
        assert_eq!(tier_for(9), 3);
        assert_eq!(candidates("X", 7), candidates("X", 3));
    }

    #[test]
    fn test_food_wins_over_service() {
        let reply = render_fallback("Joe's", "Great FOOD and service", 5, &Fixed(0)).unwrap();
        assert!(reply.ends_with(FOOD_COMPLIMENT));
        assert!(!reply.contains(SERVICE_COMPLIMENT));
    }

    #[test]
    fn test_service_compliment_for_high_rating() {
        let reply = render_fallback("Joe's", "Friendly Service", 4, &Fixed(1)).unwrap();
        assert!(reply.ends_with(SERVICE_COMPLIMENT));
    }

    #[test]
    fn test_food_ignored_for_middle_rating() {
        assert_eq!(contextual_addition("the food was okay", 3), None);
    }

    #[test]
    fn test_low_rating_gets_make_it_right() {
        // Keyword matches require rating >= 4, so low ratings always fall through.
        assert_eq!(contextual_addition("cold food", 2), Some(MAKE_IT_RIGHT));
        assert_eq!(contextual_addition("", 1), Some(MAKE_IT_RIGHT));
    }

    #[test]
    fn test_joes_restaurant_example() {
        let reply = render_fallback("Joe's Restaurant", "Great food!", 5, &ThreadRandom).unwrap();
        let matches_template = candidates("Joe's Restaurant", 5)
            .iter()
            .any(|c| reply == format!("{c}{FOOD_COMPLIMENT}"));
        assert!(matches_template, "unexpected reply: {reply}");
    }

    #[test]
    fn test_fixed_index_gives_exact_output() {
        let reply = render_fallback("Joe's Restaurant", "Great food!", 5, &Fixed(2)).unwrap();
        assert_eq!(
            reply,
            "Thank you for taking the time to leave such a wonderful review! We're delighted you had a great experience at Joe's Restaurant. See you again soon! We're so glad you enjoyed our cuisine!"
        );
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<_> = (0..8)
            .map(|_| render_fallback("Joe's", "ok", 3, &a).unwrap())
            .collect();
        let second: Vec<_> = (0..8)
            .map(|_| render_fallback("Joe's", "ok", 3, &b).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        assert!(render_fallback("Joe's", "ok", 5, &Fixed(3)).is_err());
    }
}
