use serde::de::DeserializeOwned;
use temporal_sdk_core_protos::coresdk::FromJsonPayloadExt;
use temporal_sdk_core_protos::temporal::api::common::v1::Payload;

/// Decode the first workflow argument, falling back to `default` when the
/// workflow was started without one.
pub fn first_arg_or<T: DeserializeOwned>(args: &[Payload], default: T) -> anyhow::Result<T> {
    match args.first() {
        Some(payload) => Ok(T::from_json_payload(payload)?),
        None => Ok(default),
    }
}
