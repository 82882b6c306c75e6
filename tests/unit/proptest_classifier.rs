//! Property-based tests for the classifier
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use ticketgate::core::models::Verdict;
use ticketgate::core::services::{classify, extract_from_branch_name, leading_ticket_id};

proptest! {
    /// A message without digits can never carry a ticket
    #[test]
    fn digitless_message_is_never_ticketed(message in "[a-zA-Z :,.]{0,40}", branch in "[a-z/]{0,20}") {
        prop_assume!(!message.to_lowercase().starts_with("no-ticket"));
        prop_assert_eq!(classify(&message, &branch).verdict, Verdict::NonCompliant);
    }

    /// The ticket a branch carries, echoed at the start of the message, is compliant
    #[test]
    fn branch_ticket_echoed_is_compliant(
        project in "[A-Z]{2,6}",
        number in 1u32..100_000,
        desc in "[a-z-]{0,12}",
        text in "[a-z ]{0,20}",
    ) {
        let branch = format!("feature/{project}-{number}{desc}");
        let message = format!("{project}-{number}: {text}");
        prop_assert_eq!(classify(&message, &branch).verdict, Verdict::Compliant);
    }

    /// Case and separator spelling do not affect ticket equality
    #[test]
    fn spelling_is_ignored(project in "[A-Z]{2,6}", number in 1u32..100_000) {
        let branch = format!("{project}-{number}-work");
        let message = format!("{}_{number} work", project.to_lowercase());
        prop_assert_eq!(classify(&message, &branch).verdict, Verdict::Compliant);
    }

    /// Different ticket numbers never match
    #[test]
    fn different_numbers_mismatch(project in "[A-Z]{2,6}", a in 1u32..10_000, b in 1u32..10_000) {
        prop_assume!(a != b);
        let branch = format!("bugfix/{project}-{a}");
        let message = format!("{project}-{b}: fix");
        prop_assert_eq!(classify(&message, &branch).verdict, Verdict::CompliantButMismatched);
    }

    /// Classification is a pure function of its inputs
    #[test]
    fn classify_is_deterministic(message in ".{0,40}", branch in ".{0,20}") {
        prop_assert_eq!(classify(&message, &branch), classify(&message, &branch));
    }

    /// A leading ticket is found again in its own display form
    #[test]
    fn leading_ticket_display_reparses(project in "[a-zA-Z]{1,6}", number in 0u32..100_000) {
        let message = format!("{project}-{number} x");
        let ticket = leading_ticket_id(&message).unwrap();
        prop_assert_eq!(leading_ticket_id(&ticket.to_string()), Some(ticket.clone()));
        prop_assert_eq!(extract_from_branch_name(&ticket.to_string()), Some(ticket));
    }
}
