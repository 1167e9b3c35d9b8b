//! Text and links handed to the platform share sheet, WhatsApp, and mail.

use hf_core::catalog;
use hf_core::entities::{Diagnosis, NewTechnician};
use hf_core::enums::ApplianceKind;

/// Summary of a diagnosis for sharing.
#[must_use]
pub fn share_text(appliance: ApplianceKind, diagnosis: &Diagnosis) -> String {
    format!(
        "🔍 Diagnóstico de Eletrodomésticos\n\nEquipamento: {}\nCusto médio: {}",
        catalog::appliance(appliance).label,
        diagnosis.cost_range
    )
}

/// `wa.me` link for a technician phone. Non-digits are dropped.
#[must_use]
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

/// `mailto:` link notifying the admin of a new registration.
///
/// The attachment never goes into the mail; the admin reviews it in the panel.
#[must_use]
pub fn registration_mailto(admin_email: &str, technician: &NewTechnician) -> String {
    let subject = format!(
        "Solicitação de Cadastro: {} ({})",
        technician.name, technician.city
    );
    let specialties = technician
        .specialties
        .iter()
        .map(|kind| catalog::appliance(*kind).label)
        .collect::<Vec<_>>()
        .join(", ");
    let body = format!(
        "Novo técnico aguardando aprovação:\n\n\
         Nome: {}\nWhatsApp: {}\nCidade: {}\nEspecialidades: {specialties}\n\n\
         Verifique o comprovante no painel do app.",
        technician.name, technician.phone, technician.city
    );
    format!(
        "mailto:{admin_email}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn technician() -> NewTechnician {
        NewTechnician {
            name: "Joana Silva".into(),
            phone: "11988887777".into(),
            city: "Campinas".into(),
            specialties: vec![ApplianceKind::Lavadora, ApplianceKind::AirFryer],
            payment_proof: Some("data:image/png;base64,iVBORw0KGgo=".into()),
        }
    }

    #[test]
    fn share_text_uses_label_and_cost_range() {
        let diagnosis = catalog::default_diagnosis();
        assert_eq!(
            share_text(ApplianceKind::FornoEletrico, diagnosis),
            "🔍 Diagnóstico de Eletrodomésticos\n\nEquipamento: Forno Elétrico\nCusto médio: R$ 150 a R$ 500"
        );
    }

    #[test]
    fn whatsapp_link_keeps_digits() {
        assert_eq!(whatsapp_link("(11) 98888-7777"), "https://wa.me/11988887777");
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let link = registration_mailto("admin@example.com", &technician());
        assert!(link.starts_with("mailto:admin@example.com?subject="));
        let subject =
            "Solicita%C3%A7%C3%A3o%20de%20Cadastro%3A%20Joana%20Silva%20%28Campinas%29";
        assert!(link.contains(subject));
        assert!(link.contains("Especialidades%3A%20Lavadora%2C%20Air%20Fryer"));
        assert!(!link.contains("base64"));
    }
}
