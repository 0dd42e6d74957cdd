use anyhow::bail;

use crate::{models::appointments::ConsultationType, utils::get_str_pattern_opt};

const ALL_SPECIALTIES: &str = "All Specialties";

/// LIKE patterns for the doctor search: the free-text query, then the
/// specialty. Blank input and `All Specialties` match anything.
pub fn search_patterns(query: Option<String>, specialty: Option<String>) -> (String, String) {
    let query = query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());
    let specialty = specialty
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL_SPECIALTIES));

    (get_str_pattern_opt(query), get_str_pattern_opt(specialty))
}

pub fn check_consult_offered(consult_type: ConsultationType, offers_video: bool) -> anyhow::Result<()> {
    if consult_type == ConsultationType::Video && !offers_video {
        bail!("This doctor does not offer video consultations");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_specialty_matches_everything() {
        for specialty in &["All Specialties", " all specialties ", "", "   "] {
            let (_, pattern) = search_patterns(None, Some(specialty.to_string()));
            assert_eq!(pattern, "%");
        }
        assert_eq!(search_patterns(None, None), ("%".to_string(), "%".to_string()));
    }

    #[test]
    fn query_and_specialty_become_like_patterns() {
        let (query, specialty) = search_patterns(
            Some(" smith ".to_string()),
            Some("Cardiology".to_string()),
        );
        assert_eq!(query, "%smith%");
        assert_eq!(specialty, "%Cardiology%");
    }

    #[test]
    fn video_needs_a_video_doctor() {
        assert!(check_consult_offered(ConsultationType::Video, false).is_err());
        assert!(check_consult_offered(ConsultationType::Video, true).is_ok());
        assert!(check_consult_offered(ConsultationType::InPerson, false).is_ok());
        assert!(check_consult_offered(ConsultationType::Phone, false).is_ok());
    }
}
