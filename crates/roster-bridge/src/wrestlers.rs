//! Handlers for wrestler operations.

use roster_core::{
  store::RosterStore,
  wrestler::{NewWrestler, Wrestler},
};

use crate::{error::BridgeError, request::Response};

pub async fn create<S>(store: &S, wrestler: NewWrestler) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let id = store
    .create_wrestler(wrestler)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Created { id })
}

pub async fn list<S>(store: &S) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store.list_wrestlers().await.map_err(BridgeError::from_store)?;
  Ok(Response::Wrestlers(rows))
}

/// An absent wrestler is `null` on the wire, not an error.
pub async fn get_one<S>(store: &S, id: i64) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let row = store.get_wrestler(id).await.map_err(BridgeError::from_store)?;
  Ok(Response::Wrestler(row))
}

pub async fn update<S>(store: &S, wrestler: Wrestler) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .update_wrestler(wrestler)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Affected { rows })
}

pub async fn delete<S>(store: &S, id: i64) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .delete_wrestler(id)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Affected { rows })
}
