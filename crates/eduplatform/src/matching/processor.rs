/// Availability and recommendation resolvers
use super::{Availability, InterestReport, OpenSlot};
use crate::catalog::{Catalog, SimilarCourseOffering};
use crate::interest::CourseInterest;
use tracing::debug;

/// Resolves registered interests against a catalog.
///
/// Both operations are pure functions over the catalog and the interest;
/// unknown unit/day/shift names simply never match.
pub struct InterestMatcher {
    catalog: Catalog,
}

impl InterestMatcher {
    /// Creates a matcher over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Looks for an open class matching the interest.
    ///
    /// Walks the Cartesian product of selected units × days × shifts (units
    /// outer, days middle, shifts inner, each in selection order) and returns
    /// the first triple whose slot exists and is available. Exhaustive linear
    /// search with early exit; there is no preference scoring, the first
    /// match in iteration order wins.
    pub fn resolve_availability(&self, interest: &CourseInterest) -> Availability {
        for unit in &interest.selected_units {
            for day in &interest.selected_days {
                for shift in &interest.selected_shifts {
                    let slot = self
                        .catalog
                        .slot(&interest.course_name, unit, day, shift)
                        .filter(|slot| slot.available);

                    if let Some(slot) = slot {
                        debug!(course = %interest.course_name, %unit, %day, %shift, "slot available");
                        return Availability::Available(OpenSlot {
                            unit: unit.clone(),
                            day: day.clone(),
                            shift: shift.clone(),
                            start_date: slot.start_date,
                            enroll_deadline: slot.enroll_deadline,
                        });
                    }
                }
            }
        }

        Availability::Unavailable
    }

    /// Suggests up to two similar-course offerings for an interest with no
    /// available slot.
    ///
    /// Tiered fallback, each tier tried only when the previous one produced
    /// nothing: day+shift match, then shift only, then day only, then the
    /// whole offering list. Results keep the list's authored order and are
    /// truncated to two; the `distance_km` and `match_type` fields are never
    /// consulted.
    pub fn recommend_similar(&self, interest: &CourseInterest) -> Vec<SimilarCourseOffering> {
        let offerings = self.catalog.offerings();

        let matches_day =
            |o: &SimilarCourseOffering| interest.selected_days.iter().any(|d| d == &o.day);
        let matches_shift =
            |o: &SimilarCourseOffering| interest.selected_shifts.iter().any(|s| s == &o.shift);

        let mut picks: Vec<&SimilarCourseOffering> = offerings
            .iter()
            .filter(|o| matches_day(o) && matches_shift(o))
            .collect();

        if picks.is_empty() {
            picks = offerings.iter().filter(|o| matches_shift(o)).collect();
        }
        if picks.is_empty() {
            picks = offerings.iter().filter(|o| matches_day(o)).collect();
        }
        if picks.is_empty() {
            picks = offerings.iter().collect();
        }

        picks.into_iter().take(2).cloned().collect()
    }

    /// Runs both resolvers for one interest, the way the profile page does:
    /// recommendations only when nothing is available.
    pub fn report(&self, interest: &CourseInterest) -> InterestReport {
        let availability = self.resolve_availability(interest);
        let recommendations = if availability.is_available() {
            Vec::new()
        } else {
            self.recommend_similar(interest)
        };

        InterestReport {
            interest: interest.clone(),
            availability,
            recommendations,
        }
    }

    /// The catalog this matcher resolves against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogData, MatchType, SlotRecord};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn interest(units: &[&str], days: &[&str], shifts: &[&str]) -> CourseInterest {
        CourseInterest {
            id: Uuid::new_v4(),
            course_name: "Assistente de Design de Embalagens".to_owned(),
            selected_units: owned(units),
            selected_days: owned(days),
            selected_shifts: owned(shifts),
            registered_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn slot(unit: &str, day: &str, shift: &str, available: bool) -> SlotRecord {
        SlotRecord {
            course_name: "Assistente de Design de Embalagens".to_owned(),
            unit: unit.to_owned(),
            day: day.to_owned(),
            shift: shift.to_owned(),
            available,
            start_date: date(2026, 3, 1),
            enroll_deadline: date(2026, 2, 20),
        }
    }

    #[test]
    fn unavailable_when_no_triple_matches() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        let result = matcher.resolve_availability(&interest(
            &["Unidade B - Zona Sul"],
            &["Terça-feira"],
            &["Manhã (08h às 12h)"],
        ));
        assert_eq!(result, Availability::Unavailable);
    }

    #[test]
    fn unknown_names_never_match() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        let result = matcher.resolve_availability(&interest(
            &["Unidade Z"],
            &["Feriado"],
            &["Madrugada"],
        ));
        assert_eq!(result, Availability::Unavailable);
    }

    #[test]
    fn slot_marked_unavailable_does_not_match() {
        let data = CatalogData {
            units: owned(&["Unidade A - Centro"]),
            days: owned(&["Segunda-feira"]),
            shifts: owned(&["Noite (18h às 22h)"]),
            slots: vec![slot("Unidade A - Centro", "Segunda-feira", "Noite (18h às 22h)", false)],
            offerings: Vec::new(),
        };
        let matcher = InterestMatcher::new(Catalog::from_data(data));

        let result = matcher.resolve_availability(&interest(
            &["Unidade A - Centro"],
            &["Segunda-feira"],
            &["Noite (18h às 22h)"],
        ));
        assert_eq!(result, Availability::Unavailable);
    }

    #[test]
    fn first_match_in_iteration_order_wins() {
        // Two available slots; units are the outer loop, so the slot at the
        // first selected unit must win even though both match.
        let data = CatalogData {
            units: owned(&["Unidade A - Centro", "Unidade B - Zona Sul"]),
            days: owned(&["Segunda-feira"]),
            shifts: owned(&["Noite (18h às 22h)"]),
            slots: vec![
                slot("Unidade A - Centro", "Segunda-feira", "Noite (18h às 22h)", true),
                slot("Unidade B - Zona Sul", "Segunda-feira", "Noite (18h às 22h)", true),
            ],
            offerings: Vec::new(),
        };
        let matcher = InterestMatcher::new(Catalog::from_data(data));

        let result = matcher.resolve_availability(&interest(
            &["Unidade B - Zona Sul", "Unidade A - Centro"],
            &["Segunda-feira"],
            &["Noite (18h às 22h)"],
        ));
        assert_eq!(result.slot().unwrap().unit, "Unidade B - Zona Sul");
    }

    #[test]
    fn tier_one_output_is_day_and_shift_filter() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        // CL-003 matches Terça + Tarde exactly; a shift-only match (CL-007,
        // also Tarde) must not appear once tier 1 is nonempty.
        let picks = matcher.recommend_similar(&interest(
            &["Unidade A - Centro"],
            &["Terça-feira"],
            &["Tarde (13h às 17h)"],
        ));
        let codes: Vec<&str> = picks.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["CL-003"]);
    }

    #[test]
    fn shift_only_tier_keeps_authored_order() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        // No offering is on Segunda, two are Tarde: tier 2 applies.
        let picks = matcher.recommend_similar(&interest(
            &["Unidade A - Centro"],
            &["Segunda-feira"],
            &["Tarde (13h às 17h)"],
        ));
        let codes: Vec<&str> = picks.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["CL-003", "CL-007"]);
    }

    #[test]
    fn day_only_tier_applies_when_no_shift_matches() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        // Integral matches no offering shift; Sexta matches CL-009 by day.
        let picks = matcher.recommend_similar(&interest(
            &["Unidade A - Centro"],
            &["Sexta-feira"],
            &["Integral (08h às 17h)"],
        ));
        let codes: Vec<&str> = picks.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["CL-009"]);
    }

    #[test]
    fn unconditional_fallback_returns_first_two() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        // Domingo + Integral match nothing at any tier.
        let picks = matcher.recommend_similar(&interest(
            &["Unidade B - Zona Sul"],
            &["Domingo"],
            &["Integral (08h às 17h)"],
        ));
        let codes: Vec<&str> = picks.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["CL-003", "CL-005"]);
    }

    #[test]
    fn recommendations_never_exceed_two() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        // Every day and every shift selected: tier 1 matches all five
        // offerings, output is still capped at two.
        let days: Vec<&str> = matcher.catalog().days().iter().map(String::as_str).collect();
        let shifts: Vec<&str> = matcher.catalog().shifts().iter().map(String::as_str).collect();
        let picks =
            matcher.recommend_similar(&interest(&["Unidade A - Centro"], &days, &shifts));
        assert_eq!(picks.len(), 2);
        assert_eq!(picks[0].code, "CL-003");
        assert_eq!(picks[1].code, "CL-005");
    }

    #[test]
    fn empty_offering_list_yields_empty_recommendations() {
        let matcher = InterestMatcher::new(Catalog::empty());
        let picks = matcher.recommend_similar(&interest(
            &["Unidade A - Centro"],
            &["Segunda-feira"],
            &["Noite (18h às 22h)"],
        ));
        assert!(picks.is_empty());
    }

    #[test]
    fn report_skips_recommendations_when_available() {
        let matcher = InterestMatcher::new(Catalog::builtin());
        let report = matcher.report(&interest(
            &["Unidade A - Centro"],
            &["Segunda-feira"],
            &["Noite (18h às 22h)"],
        ));
        assert!(report.availability.is_available());
        assert!(report.recommendations.is_empty());

        let report = matcher.report(&interest(
            &["Unidade B - Zona Sul"],
            &["Terça-feira"],
            &["Manhã (08h às 12h)"],
        ));
        assert!(!report.availability.is_available());
        assert!(!report.recommendations.is_empty());
        assert!(report.recommendations.len() <= 2);
    }

    #[test]
    fn match_type_metadata_does_not_affect_ordering() {
        // CL-005 (similar-course) precedes CL-001B (same-day-shift) in the
        // authored list; ordering must follow the list, not the metadata.
        let matcher = InterestMatcher::new(Catalog::builtin());
        let picks = matcher.recommend_similar(&interest(
            &["Unidade A - Centro"],
            &["Domingo"],
            &["Integral (08h às 17h)"],
        ));
        assert_eq!(picks[0].match_type, MatchType::SameDayShift);
        assert_eq!(picks[1].match_type, MatchType::SimilarCourse);
    }
}
