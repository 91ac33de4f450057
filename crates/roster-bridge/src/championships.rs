//! Handlers for the championship ledger.

use roster_core::{championship::NewChampionship, store::RosterStore};

use crate::{error::BridgeError, request::Response};

pub async fn list<S>(store: &S) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .list_championships()
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Championships(rows))
}

pub async fn create<S>(
  store: &S,
  input: NewChampionship,
) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let id = store
    .create_championship(input)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Created { id })
}

pub async fn transfer<S>(
  store: &S,
  championship_id: i64,
  wrestler_id: Option<i64>,
) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .transfer_championship_holder(championship_id, wrestler_id)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Affected { rows })
}

pub async fn delete<S>(store: &S, id: i64) -> Result<Response, BridgeError>
where
  S: RosterStore,
{
  let rows = store
    .delete_championship(id)
    .await
    .map_err(BridgeError::from_store)?;
  Ok(Response::Affected { rows })
}
