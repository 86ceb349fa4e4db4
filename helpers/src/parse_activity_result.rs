use anyhow::{anyhow, bail};
use serde::de::DeserializeOwned;
use temporal_sdk_core_protos::coresdk::FromJsonPayloadExt;
use temporal_sdk_core_protos::coresdk::activity_result::{
    ActivityResolution, activity_resolution::Status,
};

/// Decode the JSON payload of a completed activity.
///
/// Failed, cancelled and backed-off resolutions, as well as a completion
/// without a payload, are reported as errors.
pub fn parse_activity_result<T: DeserializeOwned>(res: &ActivityResolution) -> anyhow::Result<T> {
    match res.status.as_ref() {
        Some(Status::Completed(done)) => {
            let payload = done
                .result
                .as_ref()
                .ok_or_else(|| anyhow!("activity completed without a result payload"))?;
            Ok(T::from_json_payload(payload)?)
        }
        Some(Status::Failed(failed)) => {
            let msg = failed
                .failure
                .as_ref()
                .map(|f| f.message.clone())
                .unwrap_or_default();
            bail!("activity failed: {msg}")
        }
        Some(Status::Cancelled(_)) => bail!("activity was cancelled"),
        Some(Status::Backoff(_)) => bail!("activity is backing off for a local retry"),
        None => bail!("activity resolution has no status"),
    }
}
