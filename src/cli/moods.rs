use tabled::Table;

use crate::{
    analysis::{Interval, MOOD_CATEGORIES, MoodCategory},
    types::MoodTableRow,
};

/// Prints the built-in mood categories in classification order.
pub fn moods() {
    let rows: Vec<MoodTableRow> = MOOD_CATEGORIES
        .iter()
        .map(|c| MoodTableRow {
            emoji: c.emoji.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            criteria: describe_criteria(c),
        })
        .collect();

    println!("{}", Table::new(rows));
}

fn describe_criteria(category: &MoodCategory) -> String {
    let criteria = &category.criteria;
    let mut parts = vec![
        format!("energy {}", range(&criteria.energy)),
        format!("valence {}", range(&criteria.valence)),
    ];
    parts.extend(
        criteria
            .optional()
            .map(|(feature, interval)| format!("{} {}", feature, range(&interval))),
    );
    parts.join(", ")
}

fn range(interval: &Interval) -> String {
    format!("[{:.1}, {:.1}]", interval.min, interval.max)
}
