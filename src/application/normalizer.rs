use crate::config::Config;
use crate::constants::{DEFAULT_EXPIRY, DEFAULT_ORDER_SIZE};
use crate::error::AppError;
use crate::model::requests::OrderRequest;
use crate::presentation::instruction::Instruction;
use crate::presentation::order::{Action, Direction, OrderType, TimeInForce};

/// Resolves a trimmed, non-empty string field; empty strings count as unset
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Maps an inbound instruction onto a canonical broker order.
///
/// Pure transform: defaults are applied (size 1, MARKET, expiry "-"),
/// direction and `force_open` are fully resolved from the action, and every
/// violated precondition is rejected before any broker call is made.
/// CLOSE_* instructions always net against the existing position; derived
/// direction and `force_open` override anything supplied in the input.
pub fn normalize(instruction: &Instruction, config: &Config) -> Result<OrderRequest, AppError> {
    let epic = text(&instruction.epic)
        .ok_or_else(|| AppError::Validation(String::from("missing 'epic'")))?
        .to_string();

    let order_type = match text(&instruction.order_type) {
        None => OrderType::Market,
        Some(token) => OrderType::parse(token).ok_or_else(|| {
            AppError::Validation(String::from("order_type must be 'MARKET' or 'LIMIT'"))
        })?,
    };

    let level = instruction.level.as_ref().and_then(|s| s.as_f64());
    if order_type == OrderType::Limit && level.is_none() {
        return Err(AppError::Validation(String::from(
            "for LIMIT orders, 'level' is required",
        )));
    }
    let level = match order_type {
        OrderType::Market => None,
        OrderType::Limit => level,
    };

    let action = Action::parse(text(&instruction.action));
    let (direction, force_open) = match action {
        Action::CloseLong => (Direction::Sell, false),
        Action::CloseShort => (Direction::Buy, false),
        Action::Open => {
            let token = text(&instruction.direction).ok_or_else(|| {
                AppError::Validation(String::from("missing 'direction' for OPEN"))
            })?;
            let direction = Direction::parse(token).ok_or_else(|| {
                AppError::Validation(String::from("direction must be 'BUY' or 'SELL'"))
            })?;
            let force_open = instruction
                .force_open
                .as_ref()
                .map(|t| t.as_bool(true))
                .unwrap_or(true);
            (direction, force_open)
        }
    };

    let size = instruction
        .size
        .as_ref()
        .and_then(|s| s.as_f64())
        .unwrap_or(DEFAULT_ORDER_SIZE);
    if size <= 0.0 {
        return Err(AppError::Validation(String::from("'size' must be positive")));
    }

    let guaranteed_stop = instruction
        .guaranteed_stop
        .as_ref()
        .map(|t| t.as_bool(false))
        .unwrap_or(false);
    let trailing_stop = instruction
        .trailing_stop
        .as_ref()
        .map(|t| t.as_bool(false))
        .unwrap_or(false);

    Ok(OrderRequest {
        epic,
        expiry: text(&instruction.expiry).unwrap_or(DEFAULT_EXPIRY).to_string(),
        direction,
        size,
        order_type,
        level,
        limit_distance: instruction.limit_distance.as_ref().and_then(|s| s.as_f64()),
        limit_level: instruction.limit_level.as_ref().and_then(|s| s.as_f64()),
        stop_distance: instruction.stop_distance.as_ref().and_then(|s| s.as_f64()),
        stop_level: instruction.stop_level.as_ref().and_then(|s| s.as_f64()),
        guaranteed_stop,
        trailing_stop,
        trailing_stop_increment: instruction
            .trailing_stop_increment
            .as_ref()
            .and_then(|s| s.as_f64()),
        force_open,
        currency_code: text(&instruction.currency_code)
            .unwrap_or(config.order.default_currency.as_str())
            .to_string(),
        time_in_force: text(&instruction.time_in_force).and_then(TimeInForce::parse),
        good_till_date: text(&instruction.good_till_date).map(str::to_string),
        quote_id: text(&instruction.quote_id).map(str::to_string),
        deal_reference: None,
    })
}
