use crate::modules::activities::application::errors::ApplicationError;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::ports::{ActivityStore, StoreError};

/// Load the activity, run `decide` against it, and save the accepted state.
///
/// A concurrent save between load and save surfaces as a version mismatch; the
/// whole cycle is retried against fresh state so the decision is never made on
/// a stale participant list. Every mismatch means another save landed, so the
/// retries always make progress and are not capped.
pub async fn decide_and_save<TStore, F>(
    store: &TStore,
    activity_name: &str,
    decide: F,
) -> Result<Activity, ApplicationError>
where
    TStore: ActivityStore + ?Sized,
    F: Fn(&Activity) -> Decision,
{
    let mut attempt: usize = 1;
    loop {
        let loaded = store
            .load(activity_name)
            .await?
            .ok_or(ApplicationError::ActivityNotFound)?;

        let activity = match decide(&loaded.activity) {
            Decision::Accepted { activity } => activity,
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        match store
            .save(activity_name, loaded.version, activity.clone())
            .await
        {
            Ok(()) => return Ok(activity),
            Err(StoreError::VersionMismatch { expected, actual }) => {
                tracing::warn!(
                    activity_name,
                    expected,
                    actual,
                    attempt,
                    "activity changed while deciding, retrying"
                );
                attempt += 1;
            }
            Err(StoreError::NotFound(_)) => return Err(ApplicationError::ActivityNotFound),
            Err(e) => return Err(e.into()),
        }
    }
}
