//! Reward points scoring.
//!
//! Seven independent rules are evaluated against a receipt and their
//! contributions are summed. Scoring is pure: it reads the receipt and
//! nothing else.

use super::receipt::{Item, Money, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const ROUND_TOTAL_POINTS: i64 = 50;
const QUARTER_TOTAL_POINTS: i64 = 25;
const ITEM_PAIR_POINTS: i64 = 5;
const ODD_DAY_POINTS: i64 = 6;
const AFTERNOON_POINTS: i64 = 10;
const DESCRIPTION_PRICE_MULTIPLIER: Decimal = dec!(0.2);

/// Computes the reward points earned by a receipt.
pub fn calculate_points(receipt: &Receipt) -> i64 {
    [
        retailer_points(&receipt.retailer),
        round_total_points(&receipt.total),
        quarter_total_points(&receipt.total),
        item_pair_points(receipt.items.len()),
        receipt.items.iter().map(description_points).fold(0, i64::saturating_add),
        odd_day_points(receipt.purchase_date),
        afternoon_points(receipt.purchase_time),
    ]
    .into_iter()
    .fold(0, i64::saturating_add)
}

/// One point per ASCII letter or digit in the retailer name.
fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

fn round_total_points(total: &Money) -> i64 {
    match total.cents() {
        None | Some("00") => ROUND_TOTAL_POINTS,
        _ => 0,
    }
}

// Overlaps with the round-total rule: both fire on ".00" or no cents.
fn quarter_total_points(total: &Money) -> i64 {
    match total.cents() {
        None | Some("00" | "50" | "75") => QUARTER_TOTAL_POINTS,
        _ => 0,
    }
}

fn item_pair_points(item_count: usize) -> i64 {
    (item_count / 2) as i64 * ITEM_PAIR_POINTS
}

/// `ceil(price * 0.2)` for items whose trimmed description length is a
/// multiple of three. An empty description counts.
fn description_points(item: &Item) -> i64 {
    let length = item.short_description.trim_matches(' ').chars().count();
    if length % 3 != 0 {
        return 0;
    }

    let earned = (item.price.amount() * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    earned.to_i64().unwrap_or(if earned.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

fn odd_day_points(date: NaiveDate) -> i64 {
    if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 }
}

/// Strictly between 14:00 and 16:00.
fn afternoon_points(time: NaiveTime) -> i64 {
    match (time.hour(), time.minute()) {
        (14, minute) if minute > 0 => AFTERNOON_POINTS,
        (15, _) => AFTERNOON_POINTS,
        _ => 0,
    }
}
