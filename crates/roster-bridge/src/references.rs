//! Handlers for the reference registry: shows, factions, weight classes and
//! wrestler types.

use roster_core::{reference::ReferenceKind, store::RosterStore};

use crate::{error::BridgeError, request::Response};

pub async fn list<S>(store: &S, kind: ReferenceKind) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .list_references(kind)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::References(rows))
}

pub async fn create<S>(
  store: &S,
  kind: ReferenceKind,
  name: String,
) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let id = store
    .create_reference(kind, name)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Created { id })
}

/// Refused with `dependency_exists` while the row is in use.
pub async fn delete<S>(
  store: &S,
  kind: ReferenceKind,
  id: i64,
) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .delete_reference(kind, id)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Affected { rows })
}
