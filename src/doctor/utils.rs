use anyhow::{bail, Context};

use super::requests::AvailabilityInput;
use crate::{
    booking::slots::parse_slot,
    models::availability::{NewAvailability, UpdateAvailability},
};

/// A validated availability save: rows to insert in one batch, then rows to
/// update one at a time.
pub struct AvailabilityPlan {
    pub inserts: Vec<NewAvailability>,
    pub updates: Vec<(u64, UpdateAvailability)>,
}

pub fn plan_availability_save(
    did: &str,
    slots: Vec<AvailabilityInput>,
) -> anyhow::Result<AvailabilityPlan> {
    let mut plan = AvailabilityPlan {
        inserts: vec![],
        updates: vec![],
    };

    for slot in slots {
        if !(0..7).contains(&slot.day_of_week) {
            bail!("Invalid day of week {}", slot.day_of_week);
        }
        let start_time = parse_slot(&slot.start_time).context("Wrong format on 'start_time'")?;
        let end_time = parse_slot(&slot.end_time).context("Wrong format on 'end_time'")?;

        match slot.id {
            Some(id) => plan.updates.push((
                id,
                UpdateAvailability {
                    start_time,
                    end_time,
                    is_available: slot.is_available,
                },
            )),
            None => plan.inserts.push(NewAvailability {
                did: did.to_string(),
                day_of_week: slot.day_of_week,
                start_time,
                end_time,
                is_available: slot.is_available,
            }),
        }
    }

    Ok(plan)
}

/// An update that touched no row names a slot this doctor does not own.
pub fn ensure_slot_updated(id: u64, changed: usize) -> anyhow::Result<()> {
    if changed == 0 {
        bail!("No such time slot {}", id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn input(id: Option<u64>, day: i32, start: &str, end: &str) -> AvailabilityInput {
        AvailabilityInput {
            id,
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_available: true,
        }
    }

    #[test]
    fn splits_new_and_existing() {
        let plan = plan_availability_save(
            "doc-1",
            vec![
                input(None, 1, "09:00", "17:00"),
                input(Some(4), 2, "10:00", "12:00"),
                input(None, 6, "08:30", "11:00"),
            ],
        )
        .unwrap();

        assert_eq!(plan.inserts.len(), 2);
        assert_eq!(plan.inserts[0].did, "doc-1");
        assert_eq!(plan.inserts[1].day_of_week, 6);
        assert_eq!(plan.inserts[1].start_time, NaiveTime::from_hms(8, 30, 0));

        assert_eq!(plan.updates.len(), 1);
        let (id, update) = &plan.updates[0];
        assert_eq!(*id, 4);
        assert_eq!(update.end_time, NaiveTime::from_hms(12, 0, 0));
    }

    #[test]
    fn overlaps_are_accepted() {
        let plan = plan_availability_save(
            "doc-1",
            vec![
                input(None, 3, "09:00", "12:00"),
                input(None, 3, "11:00", "13:00"),
                input(None, 3, "15:00", "14:00"),
            ],
        )
        .unwrap();
        assert_eq!(plan.inserts.len(), 3);
    }

    #[test]
    fn unmatched_update_is_an_error() {
        assert!(ensure_slot_updated(9, 0).is_err());
        assert!(ensure_slot_updated(9, 1).is_ok());
    }

    #[test]
    fn rejects_bad_day_or_time() {
        assert!(plan_availability_save("doc-1", vec![input(None, 7, "09:00", "10:00")]).is_err());
        assert!(plan_availability_save("doc-1", vec![input(None, -1, "09:00", "10:00")]).is_err());
        assert!(plan_availability_save("doc-1", vec![input(None, 0, "9am", "10:00")]).is_err());
    }
}
