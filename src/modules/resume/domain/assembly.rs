use std::collections::HashMap;

use crate::modules::resume::domain::entities::{Bullet, Entry, Resume, ResumeRows, Section};

/// Nests bullets under entries and entries under sections, drops hidden
/// sections and sorts each level by `(display_order, id)`. Rows whose parent
/// is missing or hidden are dropped.
pub fn assemble_resume(rows: ResumeRows) -> Resume {
    let mut bullets_by_entry: HashMap<i32, Vec<Bullet>> = HashMap::new();
    for bullet in rows.bullets {
        bullets_by_entry.entry(bullet.entry_id).or_default().push(bullet);
    }

    let mut entries_by_section: HashMap<i32, Vec<Entry>> = HashMap::new();
    for mut entry in rows.entries {
        let mut bullets = bullets_by_entry.remove(&entry.id).unwrap_or_default();
        bullets.sort_by_key(|b| (b.display_order, b.id));
        entry.bullets = bullets;

        entries_by_section
            .entry(entry.section_id)
            .or_default()
            .push(entry);
    }

    let mut sections: Vec<Section> = rows
        .sections
        .into_iter()
        .filter(|s| s.is_visible)
        .map(|mut section| {
            let mut entries = entries_by_section.remove(&section.id).unwrap_or_default();
            entries.sort_by_key(|e| (e.display_order, e.id));
            section.entries = entries;
            section
        })
        .collect();

    sections.sort_by_key(|s| (s.display_order, s.id));

    Resume {
        basic_info: rows.basic_info,
        sections,
    }
}
