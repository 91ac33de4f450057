//! Request bridge for the roster.
//!
//! Turns named [`Request`]s into calls on any
//! [`roster_core::store::RosterStore`] and wraps the outcome in a [`Reply`].
//! [`handle_line`] is the newline-delimited JSON form used over stdio; the
//! transport itself is the caller's responsibility.

pub mod championships;
pub mod error;
pub mod matches;
pub mod references;
pub mod request;
pub mod wrestlers;

use roster_core::{
  championship::NewChampionship, reference::ReferenceKind, store::RosterStore,
};

pub use error::{BridgeError, ErrorKind};
pub use request::{Reply, Request, Response};

/// Route one request to the store.
pub async fn dispatch<S>(store: &S, request: Request) -> Result<Response, BridgeError>
where
  S: RosterStore,
  S::Error: From<roster_core::Error>,
{
  let op = request.op();
  tracing::debug!(op, "handling request");

  let result = match request {
    Request::ListWrestlerTypes => {
      references::list(store, ReferenceKind::WrestlerType).await
    }
    Request::ListWeightClasses => {
      references::list(store, ReferenceKind::WeightClass).await
    }
    Request::ListFactions => references::list(store, ReferenceKind::Faction).await,
    Request::ListShows | Request::ListBrands => {
      references::list(store, ReferenceKind::Show).await
    }
    Request::CreateShow { name } => {
      references::create(store, ReferenceKind::Show, name).await
    }
    Request::DeleteShow { id } => {
      references::delete(store, ReferenceKind::Show, id).await
    }
    Request::CreateFaction { name } => {
      references::create(store, ReferenceKind::Faction, name).await
    }
    Request::DeleteFaction { id } => {
      references::delete(store, ReferenceKind::Faction, id).await
    }
    Request::CreateWrestlerType { name } => {
      references::create(store, ReferenceKind::WrestlerType, name).await
    }
    Request::DeleteWrestlerType { id } => {
      references::delete(store, ReferenceKind::WrestlerType, id).await
    }
    Request::CreateWeightClass { name } => {
      references::create(store, ReferenceKind::WeightClass, name).await
    }
    Request::DeleteWeightClass { id } => {
      references::delete(store, ReferenceKind::WeightClass, id).await
    }

    Request::CreateWrestler { wrestler } => wrestlers::create(store, wrestler).await,
    Request::ListWrestlers => wrestlers::list(store).await,
    Request::ListWrestler { id } => wrestlers::get_one(store, id).await,
    Request::UpdateWrestler { wrestler } => wrestlers::update(store, wrestler).await,
    Request::DeleteWrestler { id } => wrestlers::delete(store, id).await,

    Request::ListChampionships => championships::list(store).await,
    Request::CreateChampionship {
      title_name,
      show_id,
      is_tag_team,
      current_holder_id,
    } => {
      let input = NewChampionship {
        title_name,
        show_id,
        is_tag_team,
        current_holder_id,
      };
      championships::create(store, input).await
    }
    Request::TransferChampionshipHolder { championship_id, wrestler_id } => {
      championships::transfer(store, championship_id, wrestler_id).await
    }
    Request::DeleteChampionship { id } => championships::delete(store, id).await,

    Request::SimulateMatch { wrestler_ids, championship_id } => {
      matches::handle(store, wrestler_ids, championship_id).await
    }
  };

  if let Err(err) = &result {
    tracing::warn!(op, kind = ?err.kind, %err, "request rejected");
  }
  result
}

/// Handle one line of newline-delimited JSON and return the reply line
/// (without a trailing newline).
pub async fn handle_line<S>(store: &S, line: &str) -> String
where
  S: RosterStore,
  S::Error: From<roster_core::Error>,
{
  let reply: Reply = match serde_json::from_str::<Request>(line) {
    Ok(request) => dispatch(store, request).await.into(),
    Err(err) => {
      tracing::warn!(%err, "malformed request line");
      Reply::Error(BridgeError::malformed(err))
    }
  };

  serde_json::to_string(&reply).unwrap_or_else(|err| {
    serde_json::json!({
      "error": { "kind": ErrorKind::Store, "message": err.to_string() }
    })
    .to_string()
  })
}
