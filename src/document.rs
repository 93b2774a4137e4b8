//! Customer-facing quote document
//!
//! Every figure comes straight from the stored results; nothing is
//! recomputed here.

use std::fmt;

use chrono::NaiveDate;

use crate::models::{CalculationResults, CalculatorInputs};
use crate::slug::slugify;

pub struct QuoteDocument<'a> {
    pub inputs: &'a CalculatorInputs,
    pub results: &'a CalculationResults,
    pub date: NaiveDate,
    pub currency: &'a str,
}

impl QuoteDocument<'_> {
    /// `orcamento-<client>-<piece>.txt`
    pub fn file_name(&self) -> String {
        let client = self
            .inputs
            .client_name
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("cliente");
        let piece = if self.inputs.piece_name.is_empty() {
            "peca"
        } else {
            self.inputs.piece_name.as_str()
        };
        format!("orcamento-{}-{}.txt", slugify(client), slugify(piece))
    }
}

impl fmt::Display for QuoteDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.inputs;
        let client = inputs
            .client_name
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Cliente");
        let price = format!("{} {:.2}", self.currency, self.results.final_price_with_fee);

        writeln!(f, "ORÇAMENTO")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Cliente: {}", client)?;
        writeln!(f, "Data: {}", self.date.format("%d/%m/%Y"))?;
        writeln!(f, "Qtd.: {}", inputs.quantity)?;
        writeln!(f, "Descrição: {}", inputs.piece_name)?;
        writeln!(f, "Material: {}", inputs.material)?;
        writeln!(f, "Peso gasto em filamento: {:.2} g", inputs.filament_used)?;
        writeln!(f, "Tempo estimado: {:.1} h", self.results.total_time)?;
        writeln!(f, "Pintura manual: {}", if inputs.manual_painting { "Sim" } else { "Não" })?;
        writeln!(f, "Valor: {}", price)?;
        writeln!(f)?;
        writeln!(f, "PREÇO FINAL: {}", price)?;
        writeln!(f)?;
        writeln!(f, "Pagamento: 40% junto ao pedido e 60% na entrega")?;
        writeln!(f, "Prazo: 7 Dias Úteis")?;
        writeln!(f)?;
        writeln!(f, "Orçamento válido por 30 dias. Valores sujeitos a alteração.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{estimate, tests::sample_inputs};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn renders_quote_fields_from_results() {
        let inputs = sample_inputs();
        let mut results = estimate(&inputs).unwrap();
        // A doctored figure must show up verbatim
        results.final_price_with_fee = 99.999;

        let doc = QuoteDocument { inputs: &inputs, results: &results, date: date(), currency: "R$" };
        let text = doc.to_string();

        assert!(text.contains("Cliente: Maria Souza"));
        assert!(text.contains("Data: 07/03/2025"));
        assert!(text.contains("Qtd.: 1"));
        assert!(text.contains("Descrição: Dragon Bust"));
        assert!(text.contains("Peso gasto em filamento: 50.00 g"));
        assert!(text.contains("Tempo estimado: 2.5 h"));
        assert!(text.contains("Pintura manual: Sim"));
        assert!(text.contains("PREÇO FINAL: R$ 100.00"));
    }

    #[test]
    fn file_name_falls_back_to_defaults() {
        let mut inputs = sample_inputs();
        let results = estimate(&inputs).unwrap();

        let doc = QuoteDocument { inputs: &inputs, results: &results, date: date(), currency: "R$" };
        assert_eq!(doc.file_name(), "orcamento-maria-souza-dragon-bust.txt");

        inputs.client_name = None;
        inputs.piece_name = String::new();
        let doc = QuoteDocument { inputs: &inputs, results: &results, date: date(), currency: "R$" };
        assert_eq!(doc.file_name(), "orcamento-cliente-peca.txt");

        inputs.client_name = Some(String::new());
        inputs.piece_name = "Vaso".to_string();
        let doc = QuoteDocument { inputs: &inputs, results: &results, date: date(), currency: "R$" };
        assert_eq!(doc.file_name(), "orcamento-cliente-vaso.txt");
    }
}
