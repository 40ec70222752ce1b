use crate::modules::resume::application::ports::outgoing::{
    BasicInfoData, BulletData, EntryData, SectionData,
};

const MAX_TITLE_LENGTH: usize = 200;
const MAX_SECTION_TYPE_LENGTH: usize = 50;

// Inputs are expected to be normalized already.

pub(crate) fn validate_basic_info(data: &BasicInfoData) -> Result<(), String> {
    required("full_name", &data.full_name, MAX_TITLE_LENGTH)
}

pub(crate) fn validate_section(data: &SectionData) -> Result<(), String> {
    required("title", &data.title, MAX_TITLE_LENGTH)?;
    required("section_type", &data.section_type, MAX_SECTION_TYPE_LENGTH)
}

pub(crate) fn validate_entry(data: &EntryData) -> Result<(), String> {
    required("title", &data.title, MAX_TITLE_LENGTH)?;

    if let (Some(start), Some(end)) = (data.start_date, data.end_date) {
        if end < start {
            return Err("end_date must not be before start_date".to_string());
        }
    }

    Ok(())
}

pub(crate) fn validate_bullet(data: &BulletData) -> Result<(), String> {
    if data.content.is_empty() {
        return Err("content must not be empty".to_string());
    }
    Ok(())
}

fn required(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if value.chars().count() > max {
        return Err(format!("{} must not exceed {} characters", field, max));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(start: Option<NaiveDate>, end: Option<NaiveDate>) -> EntryData {
        EntryData {
            title: "Engineer".to_string(),
            subtitle: None,
            location: None,
            start_date: start,
            end_date: end,
            is_current: false,
            description: None,
        }
    }

    #[test]
    fn entry_end_before_start_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2022, 5, 1);
        let end = NaiveDate::from_ymd_opt(2021, 5, 1);

        assert!(validate_entry(&entry(start, end)).is_err());
        assert!(validate_entry(&entry(end, start)).is_ok());
        assert!(validate_entry(&entry(None, end)).is_ok());
    }

    #[test]
    fn section_needs_title_and_type() {
        let mut data = SectionData {
            title: "Experience".to_string(),
            section_type: String::new(),
            is_visible: true,
        };
        assert_eq!(
            validate_section(&data),
            Err("section_type must not be empty".to_string())
        );

        data.section_type = "x".repeat(51);
        assert!(validate_section(&data).is_err());

        data.section_type = "experience".to_string();
        assert!(validate_section(&data).is_ok());
    }

    #[test]
    fn bullet_needs_content() {
        let data = BulletData {
            content: String::new(),
        };
        assert!(validate_bullet(&data).is_err());
    }
}
