use crate::models::{Athlete, WeightCategory};

/// One weight-category bucket of a grouped roster view. `category` is `None`
/// for athletes without an assigned category.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub category: Option<WeightCategory>,
    pub athletes: Vec<Athlete>,
}

/// Group athletes by their assigned weight category.
///
/// Categories appear in the order given (lightest first when loaded via the
/// repository); empty categories are skipped and uncategorized athletes end
/// up in a trailing bucket. Shared by every grouped roster view.
pub fn group_by_category(athletes: &[Athlete], categories: &[WeightCategory]) -> Vec<CategoryGroup> {
    let mut groups = Vec::new();

    for category in categories {
        let members: Vec<Athlete> = athletes
            .iter()
            .filter(|a| a.weight_category_id == Some(category.category_id))
            .cloned()
            .collect();

        if !members.is_empty() {
            groups.push(CategoryGroup {
                category: Some(category.clone()),
                athletes: members,
            });
        }
    }

    let uncategorized: Vec<Athlete> = athletes
        .iter()
        .filter(|a| a.weight_category_id.is_none())
        .cloned()
        .collect();

    if !uncategorized.is_empty() {
        groups.push(CategoryGroup {
            category: None,
            athletes: uncategorized,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{BeltRank, Gender, KarateStyle};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn category(name: &str, min: Decimal, max: Decimal) -> WeightCategory {
        WeightCategory {
            category_id: Uuid::new_v4(),
            name: name.to_string(),
            min_weight: min,
            max_weight: max,
        }
    }

    fn athlete(weight: Decimal, category: Option<Uuid>) -> Athlete {
        Athlete {
            athlete_id: Uuid::new_v4(),
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            age: 22,
            weight,
            gender: Gender::Female,
            belt_rank: BeltRank::Green,
            style: KarateStyle::GojuRyu,
            club_id: Uuid::new_v4(),
            weight_category_id: category,
            placement: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn athletes_land_in_their_assigned_category() {
        let light = category("-65kg", dec!(55), dec!(65));
        let heavy = category("-75kg", dec!(65.01), dec!(75));

        let a = athlete(dec!(60), Some(light.category_id));
        let b = athlete(dec!(70), Some(heavy.category_id));
        let c = athlete(dec!(62), Some(light.category_id));

        let groups = group_by_category(
            &[a.clone(), b.clone(), c.clone()],
            &[light.clone(), heavy.clone()],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category.as_ref().unwrap().name, "-65kg");
        assert_eq!(groups[0].athletes.len(), 2);
        assert_eq!(groups[1].category.as_ref().unwrap().name, "-75kg");
        assert_eq!(groups[1].athletes.len(), 1);
    }

    #[test]
    fn empty_categories_are_omitted() {
        let light = category("-65kg", dec!(55), dec!(65));
        let heavy = category("-75kg", dec!(65.01), dec!(75));

        let a = athlete(dec!(60), Some(light.category_id));

        let groups = group_by_category(&[a], &[light, heavy]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category.as_ref().unwrap().name, "-65kg");
    }

    #[test]
    fn uncategorized_athletes_form_a_trailing_bucket() {
        let light = category("-65kg", dec!(55), dec!(65));

        let a = athlete(dec!(60), Some(light.category_id));
        let b = athlete(dec!(80), None);

        let groups = group_by_category(&[a, b], &[light]);

        assert_eq!(groups.len(), 2);
        assert!(groups[1].category.is_none());
        assert_eq!(groups[1].athletes.len(), 1);
    }

    #[test]
    fn no_athletes_means_no_groups() {
        let light = category("-65kg", dec!(55), dec!(65));
        assert!(group_by_category(&[], &[light]).is_empty());
    }
}
