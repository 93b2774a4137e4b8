//! Cost estimation for printed pieces
//!
//! A fixed arithmetic pipeline: print-related costs are scaled by the
//! complexity multiplier, a failure surcharge is added on top, then profit
//! and the marketplace fee. Nothing is rounded here; rounding belongs to
//! whoever displays the figures.

use std::fmt;

use tracing::debug;

use crate::error::EstimateError;
use crate::models::{CalculationResults, CalculatorInputs};

/// Estimate costs and prices for one production run
///
/// Fails when a numeric field is not finite, or when the inputs are large
/// enough that a derived figure overflows. A non-positive quantity is
/// treated as 1 and a non-positive printer lifespan zeroes the wear cost.
pub fn estimate(inputs: &CalculatorInputs) -> Result<CalculationResults, EstimateError> {
    validate(inputs)?;

    let print_time = inputs.print_time_hours + inputs.print_time_minutes / 60.0;

    let filament_cost = (inputs.filament_price / 1000.0) * inputs.filament_used;

    let energy_consumption = (inputs.printer_power / 1000.0) * print_time; // kWh
    let energy_cost = energy_consumption * inputs.energy_rate;

    let wear_cost = if inputs.printer_lifespan > 0.0 {
        (inputs.printer_value / inputs.printer_lifespan) * print_time
    } else {
        0.0
    };

    let labor_cost = inputs.hourly_rate * inputs.active_work_time;
    let maintenance_total_cost = inputs.maintenance_cost * print_time;

    // Labor and finishing are not scaled by complexity
    let complexity_multiplier = inputs.complexity.multiplier();
    let print_related_cost = filament_cost + energy_cost + wear_cost + maintenance_total_cost;
    let cost_with_complexity =
        print_related_cost * complexity_multiplier + labor_cost + inputs.finishing_cost;

    let failure_cost = cost_with_complexity * (inputs.failure_rate / 100.0);
    let production_cost = cost_with_complexity + failure_cost;

    let quantity = effective_quantity(inputs.quantity);
    let cost_per_unit = production_cost / quantity;

    // Profit is taken on the batch total
    let profit_amount = production_cost * (inputs.profit_margin / 100.0);
    let profit_per_unit = profit_amount / quantity;

    let final_price = production_cost + profit_amount;
    let final_price_with_fee = final_price * (1.0 + inputs.additional_fee / 100.0);
    let final_price_per_unit = final_price_with_fee / quantity;

    let total_time = print_time + inputs.active_work_time;

    debug!(
        piece = %inputs.piece_name,
        production_cost,
        final_price_with_fee,
        "estimated piece"
    );

    let results = CalculationResults {
        print_time,
        filament_cost,
        energy_cost,
        wear_cost,
        labor_cost,
        maintenance_total_cost,
        complexity_multiplier,
        print_related_cost,
        cost_with_complexity,
        failure_cost,
        production_cost,
        cost_per_unit,
        profit_amount,
        profit_per_unit,
        final_price,
        final_price_with_fee,
        final_price_per_unit,
        total_time,
    };
    check_finite(&results)?;

    Ok(results)
}

/// Finite inputs can still overflow; never hand back `inf` or `NaN`
fn check_finite(r: &CalculationResults) -> Result<(), EstimateError> {
    let fields = [
        ("printTime", r.print_time),
        ("filamentCost", r.filament_cost),
        ("energyCost", r.energy_cost),
        ("wearCost", r.wear_cost),
        ("laborCost", r.labor_cost),
        ("maintenanceTotalCost", r.maintenance_total_cost),
        ("printRelatedCost", r.print_related_cost),
        ("costWithComplexity", r.cost_with_complexity),
        ("failureCost", r.failure_cost),
        ("productionCost", r.production_cost),
        ("costPerUnit", r.cost_per_unit),
        ("profitAmount", r.profit_amount),
        ("profitPerUnit", r.profit_per_unit),
        ("finalPrice", r.final_price),
        ("finalPriceWithFee", r.final_price_with_fee),
        ("finalPricePerUnit", r.final_price_per_unit),
        ("totalTime", r.total_time),
    ];

    match fields.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, _)) => Err(EstimateError::NonFiniteResult { field }),
        None => Ok(()),
    }
}

fn effective_quantity(quantity: i64) -> f64 {
    if quantity > 0 { quantity as f64 } else { 1.0 }
}

/// Reject non-finite numeric fields before anything is computed
pub fn validate(inputs: &CalculatorInputs) -> Result<(), EstimateError> {
    let fields = [
        ("filamentPrice", inputs.filament_price),
        ("filamentUsed", inputs.filament_used),
        ("printTimeHours", inputs.print_time_hours),
        ("printTimeMinutes", inputs.print_time_minutes),
        ("printerPower", inputs.printer_power),
        ("energyRate", inputs.energy_rate),
        ("printerValue", inputs.printer_value),
        ("printerLifespan", inputs.printer_lifespan),
        ("hourlyRate", inputs.hourly_rate),
        ("activeWorkTime", inputs.active_work_time),
        ("finishingCost", inputs.finishing_cost),
        ("maintenanceCost", inputs.maintenance_cost),
        ("failureRate", inputs.failure_rate),
        ("profitMargin", inputs.profit_margin),
        ("additionalFee", inputs.additional_fee),
    ];

    for (field, value) in fields {
        if !value.is_finite() {
            return Err(EstimateError::InvalidInput { field });
        }
    }

    if let Some(desired) = inputs.desired_price {
        if !desired.is_finite() {
            return Err(EstimateError::InvalidInput { field: "desiredPrice" });
        }
    }

    Ok(())
}

/// Printable cost breakdown for a piece
pub struct Breakdown<'a> {
    pub inputs: &'a CalculatorInputs,
    pub results: &'a CalculationResults,
    pub currency: &'a str,
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.results;
        let c = self.currency;

        writeln!(f, "=== Cost Breakdown ===")?;
        writeln!(
            f,
            "Piece: {} x{} ({})",
            self.inputs.piece_name, self.inputs.quantity, self.inputs.material
        )?;
        if let Some(client) = &self.inputs.client_name {
            writeln!(f, "Client: {}", client)?;
        }
        writeln!(f)?;

        writeln!(f, "Costs:")?;
        writeln!(f, "  Filament:     {} {:>10.2}", c, r.filament_cost)?;
        writeln!(f, "  Energy:       {} {:>10.2}", c, r.energy_cost)?;
        writeln!(f, "  Wear:         {} {:>10.2}", c, r.wear_cost)?;
        writeln!(f, "  Maintenance:  {} {:>10.2}", c, r.maintenance_total_cost)?;
        writeln!(f, "  Labor:        {} {:>10.2}", c, r.labor_cost)?;
        writeln!(f, "  Finishing:    {} {:>10.2}", c, self.inputs.finishing_cost)?;
        writeln!(
            f,
            "  Complexity:   x{:.2} ({})",
            r.complexity_multiplier,
            self.inputs.complexity.as_str()
        )?;
        writeln!(f, "  Failure:      {} {:>10.2}", c, r.failure_cost)?;
        writeln!(f)?;

        writeln!(f, "Totals:")?;
        writeln!(f, "  Production:   {} {:>10.2} ({} {:.2}/unit)", c, r.production_cost, c, r.cost_per_unit)?;
        writeln!(f, "  Profit:       {} {:>10.2} ({} {:.2}/unit)", c, r.profit_amount, c, r.profit_per_unit)?;
        writeln!(f, "  Price:        {} {:>10.2}", c, r.final_price)?;
        writeln!(f, "  With fee:     {} {:>10.2}", c, r.final_price_with_fee)?;
        writeln!(f, "  Per unit:     {} {:>10.2}", c, r.final_price_per_unit)?;
        writeln!(f, "  Total time:   {:.1} h", r.total_time)?;

        Ok(())
    }
}
