//! Subcommand handlers.
//!
//! Formatting and booking planning are plain functions so they are tested
//! without a network; the async handlers only fetch, call them, and print.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use api::{Booking, NewBooking, Profile, Role, Venue, VenueEmbeds};
use stays::{Booker, BookedRange, RangeSelection, SortMode, booked_ranges, prepare_booking, refine};
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::{CliContext, CliError};

// =============================================================================
// FORMATTING
// =============================================================================

pub(crate) fn parse_day(raw: &str) -> Result<Date, CliError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| CliError::InvalidDate(raw.to_owned()))
}

/// Single-quote `value` for POSIX shells.
pub(crate) fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// `export` lines restoring a login session in later invocations.
pub(crate) fn login_exports(profile: &Profile) -> Result<Vec<String>, CliError> {
    let token = profile.access_token.as_deref().ok_or(CliError::MissingField("accessToken"))?;
    Ok(vec![
        format!("export HOLIDAZE_TOKEN={}", shell_quote(token)),
        format!("export HOLIDAZE_USER={}", shell_quote(&profile.name)),
        format!("export HOLIDAZE_ROLE={}", profile.role().as_str()),
    ])
}

pub(crate) fn venue_line(venue: &Venue) -> String {
    let guests = venue.max_guests.map_or_else(|| "-".to_owned(), |max| max.to_string());
    let rating = venue.rating.map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"));
    let place = [venue.location.city.as_deref(), venue.location.country.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{:<38} {:<32} ${:>7.0}/night  guests {:>3}  rating {:>3}  {}", venue.id, venue.name, venue.price, guests, rating, place)
}

pub(crate) fn range_line(range: &BookedRange) -> String {
    format!("{} .. {}", range.start, range.end)
}

pub(crate) fn booking_line(booking: &Booking) -> String {
    let venue = booking.venue.as_ref().map_or("?", |v| v.name.as_str());
    let customer = booking.customer.as_ref().map_or("", |c| c.name.as_str());
    let day = |raw: &str| raw.get(..10).unwrap_or(raw).to_owned();
    format!(
        "{}  {} .. {}  {} guest(s)  {}  {}",
        booking.id,
        day(&booking.date_from),
        day(&booking.date_to),
        booking.guests,
        venue,
        customer
    )
    .trim_end()
    .to_owned()
}

// =============================================================================
// BOOKING
// =============================================================================

/// Check a date pair the way the calendar does, then build the request.
///
/// Only the two endpoints are checked against booked ranges, matching the
/// browser picker.
pub(crate) fn plan_booking(
    venue: &Venue,
    from: Date,
    to: Date,
    guests: u32,
    today: Date,
    booker: Booker<'_>,
) -> Result<NewBooking, CliError> {
    if to < from {
        return Err(CliError::InvalidRange);
    }
    let ranges = booked_ranges(&venue.bookings);
    let mut selection = RangeSelection::default();
    selection.pick(from, today, &ranges)?;
    selection.pick(to, today, &ranges)?;
    Ok(prepare_booking(Some(booker), venue, &selection, guests)?)
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

// =============================================================================
// HANDLERS
// =============================================================================

pub(crate) async fn venues(ctx: &CliContext, search: Option<&str>, guests: u32, sort: SortMode) -> Result<(), CliError> {
    let all = ctx.api.browse(search).await?;
    let visible = refine(&all, guests, sort);
    tracing::info!(fetched = all.len(), shown = visible.len(), sort = sort.as_str(), "venues");
    if visible.is_empty() {
        println!("No venues match.");
    }
    for venue in &visible {
        println!("{}", venue_line(venue));
    }
    Ok(())
}

pub(crate) async fn venue(ctx: &CliContext, id: &str, json: bool) -> Result<(), CliError> {
    let venue = ctx.api.venue(id, VenueEmbeds::all()).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&venue)?);
        return Ok(());
    }
    println!("{}", venue_line(&venue));
    if let Some(owner) = &venue.owner {
        println!("host: {}", owner.name);
    }
    if let Some(description) = venue.description.as_deref().filter(|d| !d.trim().is_empty()) {
        println!("{description}");
    }
    let amenities = venue.meta.labels();
    if !amenities.is_empty() {
        println!("amenities: {}", amenities.join(", "));
    }
    let ranges = booked_ranges(&venue.bookings);
    if ranges.is_empty() {
        println!("no booked dates");
    } else {
        println!("booked:");
        for range in &ranges {
            println!("  {}", range_line(range));
        }
    }
    Ok(())
}

pub(crate) async fn login(ctx: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let profile = ctx.api.login(email.trim(), password).await?;
    for line in login_exports(&profile)? {
        println!("{line}");
    }
    Ok(())
}

pub(crate) async fn book(ctx: &CliContext, venue_id: &str, from: &str, to: &str, guests: u32) -> Result<(), CliError> {
    let token = ctx.token()?;
    let name = ctx.user()?;
    let (from, to) = (parse_day(from)?, parse_day(to)?);
    let venue = ctx.api.venue(venue_id, VenueEmbeds { owner: true, bookings: true, reviews: false }).await?;
    let booker = Booker { token, name, role: ctx.role.unwrap_or_default() };
    let request = plan_booking(&venue, from, to, guests, today(), booker)?;
    let booking = ctx.api.create_booking(token, &request).await?;
    println!("booked {} ({} .. {}, {} guest(s)) at {}", booking.id, from, to, booking.guests, venue.name);
    Ok(())
}

pub(crate) async fn dashboard(ctx: &CliContext) -> Result<(), CliError> {
    if ctx.role == Some(Role::Customer) {
        return Err(CliError::NotManager);
    }
    let token = ctx.token()?;
    let name = ctx.user()?;
    let (venues, mut bookings) = ctx.api.dashboard(token, name).await?;
    stays::dashboard::sort_by_start(&mut bookings);

    println!("My venues ({})", venues.len());
    for venue in &venues {
        println!("  {}", venue_line(venue));
    }
    println!("Bookings ({})", bookings.len());
    for booking in &bookings {
        println!("  {}", booking_line(booking));
    }
    Ok(())
}

pub(crate) async fn delete_venue(ctx: &CliContext, id: &str) -> Result<(), CliError> {
    let token = ctx.token()?;
    ctx.api.delete_venue(token, id).await?;
    println!("deleted {id}");
    Ok(())
}
