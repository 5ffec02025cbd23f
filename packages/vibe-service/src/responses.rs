use vibe_storage::{cursor, queries};

use crate::{ServiceResult, VibeService};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextResponse {
	pub text: String,
}

impl VibeService {
	/// One entry picked uniformly at random.
	pub async fn random(&self) -> ServiceResult<TextResponse> {
		let text = queries::random_entry(&self.db).await.inspect_err(|err| {
			tracing::error!(error = %err, "Failed to fetch random response.");
		})?;

		tracing::debug!(%text, "Served random response.");

		Ok(TextResponse { text })
	}

	/// The entry under the rotation cursor; the cursor moves one step forward.
	pub async fn next(&self) -> ServiceResult<TextResponse> {
		let text = cursor::advance_and_fetch(&self.db).await.inspect_err(|err| {
			tracing::error!(error = %err, "Failed to fetch next response.");
		})?;

		tracing::debug!(%text, "Served next response.");

		Ok(TextResponse { text })
	}
}
