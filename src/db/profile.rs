use sqlx::PgConnection;
use tonic::metadata::MetadataMap;

/// Default profile ID (UUID) for single-user development mode.
pub const DEFAULT_PROFILE_ID: &str = "00000000-0000-0000-0000-000000000001";

/// gRPC metadata key for the profile ID. Session handling lives in the
/// client; the server only scopes queries by this identity.
pub const PROFILE_METADATA_KEY: &str = "x-profile-id";

/// Extracts the profile id from gRPC request metadata.
/// Falls back to DEFAULT_PROFILE_ID if not provided.
pub fn get_profile_from_metadata(metadata: &MetadataMap) -> String {
    metadata
        .get(PROFILE_METADATA_KEY)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string())
}

pub fn get_profile_from_request<T>(request: &tonic::Request<T>) -> String {
    get_profile_from_metadata(request.metadata())
}

/// Sets the current profile for the database session so row-level security
/// policies apply. Must be called on a freshly acquired connection before
/// running queries on behalf of a user.
pub async fn set_current_profile(
    conn: &mut PgConnection,
    profile_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT set_current_profile($1)")
        .bind(profile_id)
        .execute(conn)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_fallback_to_default() {
        let metadata = MetadataMap::new();
        assert_eq!(get_profile_from_metadata(&metadata), DEFAULT_PROFILE_ID);
    }

    #[test]
    fn metadata_profile_id_wins() {
        let mut metadata = MetadataMap::new();
        metadata.insert(
            PROFILE_METADATA_KEY,
            "11111111-2222-3333-4444-555555555555".parse().unwrap(),
        );
        assert_eq!(
            get_profile_from_metadata(&metadata),
            "11111111-2222-3333-4444-555555555555"
        );
    }

    #[test]
    fn empty_metadata_value_falls_back() {
        let mut metadata = MetadataMap::new();
        metadata.insert(PROFILE_METADATA_KEY, "".parse().unwrap());
        assert_eq!(get_profile_from_metadata(&metadata), DEFAULT_PROFILE_ID);
    }
}
