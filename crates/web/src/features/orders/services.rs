use sqlx::PgPool;
use storage::{
    dto::order::{CreateOrderRequest, OrderFilter, OrderResponse, UpdateOrderRequest},
    error::{Result, StorageError},
    models::{Competition, NewOrder, Order, OrderStatus},
    repository::{
        competition::CompetitionRepository, cryatlon::CryatlonRepository,
        order::OrderRepository, race::RaceRepository, relay::RelayRepository,
    },
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateOrderError {
    #[error("competition not found")]
    CompetitionNotFound,

    #[error("registration is closed for this competition")]
    RegistrationClosed,

    #[error("order names no activities")]
    NoActivities,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CreateOrderError {
    /// Wire-level error code, kept stable for existing clients.
    pub fn code(&self) -> &'static str {
        match self {
            CreateOrderError::CompetitionNotFound => "competition_not_found",
            CreateOrderError::RegistrationClosed => "registration_closed",
            CreateOrderError::NoActivities => "no_orders",
            CreateOrderError::Storage(_) => "exception_error",
        }
    }
}

/// The entry workflow: competition lookup, best-effort activity resolution,
/// transactional insert. Mail is sent by the handler after this returns.
pub async fn create_order(
    pool: &PgPool,
    req: &CreateOrderRequest,
) -> Result<(Competition, OrderResponse), CreateOrderError> {
    let competition = match CompetitionRepository::new(pool)
        .find_by_id(req.competition_id)
        .await
    {
        Ok(competition) => competition,
        Err(StorageError::NotFound) => return Err(CreateOrderError::CompetitionNotFound),
        Err(e) => return Err(e.into()),
    };

    if !competition.registration_open {
        return Err(CreateOrderError::RegistrationClosed);
    }

    if !req.names_activities() {
        return Err(CreateOrderError::NoActivities);
    }

    let requested_races = req.races.clone().unwrap_or_default();
    let races = RaceRepository::new(pool)
        .find_by_ids(competition.id, &requested_races)
        .await?;
    if races.len() != requested_races.len() {
        tracing::debug!(
            requested = requested_races.len(),
            resolved = races.len(),
            "dropped unresolvable race ids from order"
        );
    }

    let requested_relays = req.relays.clone().unwrap_or_default();
    let relays = RelayRepository::new(pool)
        .find_by_ids(competition.id, &requested_relays)
        .await?;
    if relays.len() != requested_relays.len() {
        tracing::debug!(
            requested = requested_relays.len(),
            resolved = relays.len(),
            "dropped unresolvable relay ids from order"
        );
    }

    let cryathlon = match req.cryathlon_id {
        Some(id) => {
            let found = CryatlonRepository::new(pool)
                .find_in_competition(competition.id, id)
                .await?;
            if found.is_none() {
                tracing::debug!(cryathlon_id = id, "dropped unresolvable cryatlon id from order");
            }
            found
        }
        None => None,
    };

    let new = NewOrder {
        competition_id: competition.id,
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
        middle_name: req.middle_name.clone(),
        birthdate: req.birthdate,
        gender: req.gender.clone(),
        club_name: req.club_name.clone(),
        location: req.location.clone(),
        email: req.email.clone(),
        phone: req.phone.clone(),
        race_ids: races.iter().map(|r| r.id).collect(),
        relay_ids: relays.iter().map(|r| r.id).collect(),
        cryathlon_id: cryathlon.as_ref().map(|c| c.id),
        additional: req.additional.clone(),
    };

    let order = OrderRepository::new(pool).create(&new).await?;

    Ok((
        competition,
        OrderResponse::from_parts(order, races, relays, cryathlon),
    ))
}

/// Paged admin listing with total count
pub async fn list_orders(pool: &PgPool, filter: &OrderFilter) -> Result<(Vec<Order>, i64)> {
    let repo = OrderRepository::new(pool);
    repo.list(filter).await
}

/// Order by id, with its resolved activities
pub async fn get_order(pool: &PgPool, id: i32) -> Result<OrderResponse> {
    let order = OrderRepository::new(pool).find_by_id(id).await?;
    with_activities(pool, order).await
}

/// Update status and/or processed flag. Transitions out of the terminal
/// rejected state are refused.
pub async fn update_order(
    pool: &PgPool,
    id: i32,
    req: &UpdateOrderRequest,
) -> Result<OrderResponse, UpdateOrderError> {
    let repo = OrderRepository::new(pool);
    let current = repo.find_by_id(id).await?;

    if let Some(ref next) = req.status {
        let current_status: OrderStatus = current
            .status
            .parse()
            .map_err(UpdateOrderError::CorruptStatus)?;
        let next_status: OrderStatus = next
            .parse()
            .map_err(UpdateOrderError::CorruptStatus)?;

        if !current_status.can_transition_to(next_status) {
            return Err(UpdateOrderError::RejectedIsTerminal);
        }
    }

    let updated = match repo.update(id, req.status.as_deref(), req.processed).await {
        Ok(order) => order,
        // The row was there a moment ago; a zero-row update means the
        // statement's rejected guard fired under a concurrent status change.
        Err(StorageError::NotFound) => return Err(UpdateOrderError::RejectedIsTerminal),
        Err(e) => return Err(e.into()),
    };

    Ok(with_activities(pool, updated).await?)
}

#[derive(Debug, Error)]
pub enum UpdateOrderError {
    #[error("rejected orders cannot change status")]
    RejectedIsTerminal,

    #[error("stored order status is not recognized: {0}")]
    CorruptStatus(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

async fn with_activities(pool: &PgPool, order: Order) -> Result<OrderResponse> {
    let races = RaceRepository::new(pool).list_by_order(order.id).await?;
    let relays = RelayRepository::new(pool).list_by_order(order.id).await?;
    let cryathlon = match order.cryathlon_id {
        Some(id) => CryatlonRepository::new(pool).find_by_id(id).await?,
        None => None,
    };

    Ok(OrderResponse::from_parts(order, races, relays, cryathlon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_match_the_public_contract() {
        assert_eq!(
            CreateOrderError::CompetitionNotFound.code(),
            "competition_not_found"
        );
        assert_eq!(
            CreateOrderError::RegistrationClosed.code(),
            "registration_closed"
        );
        assert_eq!(CreateOrderError::NoActivities.code(), "no_orders");
        assert_eq!(
            CreateOrderError::Storage(StorageError::NotFound).code(),
            "exception_error"
        );
    }
}
