//! Reservation data repository for database operations.
//!
//! Besides create/read/update by id, this repository answers the range queries the
//! availability engine and the front-desk dashboard are built on. Overlap queries use
//! the half-open predicate `check_in < other.check_out AND check_out > other.check_in`,
//! so back-to-back stays never collide.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::{HashMap, HashSet};

use crate::server::{
    model::reservation::{NewReservation, Reservation, ReservationStatus, StayDates},
    util::money::decimal_to_cents,
};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a confirmed reservation and returns it with its room and guest.
    ///
    /// No availability or pricing checks happen here; callers run them first inside the
    /// same transaction.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The created reservation
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn create(&self, reservation: NewReservation) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            room_id: ActiveValue::Set(reservation.room_id),
            guest_id: ActiveValue::Set(reservation.guest_id),
            check_in: ActiveValue::Set(reservation.stay.check_in()),
            check_out: ActiveValue::Set(reservation.stay.check_out()),
            party_size: ActiveValue::Set(reservation.party_size),
            total_price_cents: ActiveValue::Set(decimal_to_cents(reservation.total_price)?),
            status: ActiveValue::Set(ReservationStatus::Confirmed.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(entity.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Reservation with id {} not found after creation",
            entity.id
        )))
    }

    /// Gets a reservation by ID with its room and guest.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut hydrated = self.hydrate(vec![reservation]).await?;

        Ok(hydrated.pop())
    }

    /// Counts blocking reservations of a room that overlap `stay`.
    ///
    /// # Arguments
    /// - `room_id` - Room to check
    /// - `stay` - Requested interval
    /// - `exclude_id` - Reservation to ignore, used when a reservation moves its own dates
    pub async fn count_blocking_overlaps(
        &self,
        room_id: i32,
        stay: &StayDates,
        exclude_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(blocking_overlap(stay));

        if let Some(id) = exclude_id {
            query = query.filter(entity::reservation::Column::Id.ne(id));
        }

        query.count(self.db).await
    }

    /// Gets the ids of rooms holding at least one blocking reservation overlapping `stay`.
    pub async fn blocked_room_ids(&self, stay: &StayDates) -> Result<HashSet<i32>, DbErr> {
        let room_ids: Vec<i32> = entity::prelude::Reservation::find()
            .select_only()
            .column(entity::reservation::Column::RoomId)
            .distinct()
            .filter(blocking_overlap(stay))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(room_ids.into_iter().collect())
    }

    pub async fn update_status(&self, id: i32, status: ReservationStatus) -> Result<(), DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the stay interval, party size and total price of a reservation.
    pub async fn update_details(
        &self,
        id: i32,
        stay: StayDates,
        party_size: i32,
        total_price: Decimal,
    ) -> Result<(), DbErr> {
        entity::reservation::ActiveModel {
            id: ActiveValue::Unchanged(id),
            check_in: ActiveValue::Set(stay.check_in()),
            check_out: ActiveValue::Set(stay.check_out()),
            party_size: ActiveValue::Set(party_size),
            total_price_cents: ActiveValue::Set(decimal_to_cents(total_price)?),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Gets confirmed reservations arriving on `day`.
    pub async fn find_arrivals(&self, day: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CheckIn.eq(day))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::Confirmed.as_str()))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(reservations).await
    }

    /// Gets checked-in reservations leaving on `day`.
    pub async fn find_departures(&self, day: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CheckOut.eq(day))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::CheckedIn.as_str()))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(reservations).await
    }

    /// Gets checked-in reservations whose stay contains `day`.
    pub async fn find_occupying(&self, day: NaiveDate) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CheckIn.lte(day))
            .filter(entity::reservation::Column::CheckOut.gt(day))
            .filter(entity::reservation::Column::Status.eq(ReservationStatus::CheckedIn.as_str()))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        self.hydrate(reservations).await
    }

    /// Attaches rooms and guests to reservation rows, fetching each table once.
    async fn hydrate(
        &self,
        reservations: Vec<entity::reservation::Model>,
    ) -> Result<Vec<Reservation>, DbErr> {
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let room_ids: HashSet<i32> = reservations.iter().map(|r| r.room_id).collect();
        let guest_ids: HashSet<i32> = reservations.iter().map(|r| r.guest_id).collect();

        let rooms_map: HashMap<i32, entity::room::Model> = entity::prelude::Room::find()
            .filter(entity::room::Column::Id.is_in(room_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let guests_map: HashMap<i32, entity::guest::Model> = entity::prelude::Guest::find()
            .filter(entity::guest::Column::Id.is_in(guest_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        reservations
            .into_iter()
            .map(|reservation| {
                let room = rooms_map.get(&reservation.room_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Room {} of reservation {} not found",
                        reservation.room_id, reservation.id
                    ))
                })?;
                let guest = guests_map.get(&reservation.guest_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Guest {} of reservation {} not found",
                        reservation.guest_id, reservation.id
                    ))
                })?;

                Reservation::from_entities(reservation, room, guest)
            })
            .collect()
    }
}

/// Blocking reservations sharing at least one night with `stay`.
fn blocking_overlap(stay: &StayDates) -> Condition {
    Condition::all()
        .add(entity::reservation::Column::CheckIn.lt(stay.check_out()))
        .add(entity::reservation::Column::CheckOut.gt(stay.check_in()))
        .add(
            entity::reservation::Column::Status.is_in(
                ReservationStatus::BLOCKING
                    .iter()
                    .map(|status| status.as_str()),
            ),
        )
}
