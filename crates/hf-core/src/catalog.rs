//! Compiled-in catalog: appliances, symptom lists, and canned diagnoses.
//!
//! The diagnosis table is keyed by `"{appliance}-{symptom}"`. Keys absent from
//! the table resolve to [`default_diagnosis`]. This module is pure data plus
//! lookups; it performs no I/O.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::entities::{Appliance, Cause, Diagnosis, Symptom};
use crate::enums::{ApplianceKind, CostLevel};

/// Key of the catch-all entry in the diagnosis table.
pub const DEFAULT_KEY: &str = "default";

static APPLIANCES: [Appliance; 6] = [
    Appliance {
        id: ApplianceKind::Lavadora,
        label: "Lavadora",
        icon: "fa-soap",
        color: "bg-blue-500",
    },
    Appliance {
        id: ApplianceKind::Geladeira,
        label: "Geladeira",
        icon: "fa-refrigerator",
        color: "bg-cyan-500",
    },
    Appliance {
        id: ApplianceKind::ArCondicionado,
        label: "Ar-condicionado",
        icon: "fa-wind",
        color: "bg-sky-500",
    },
    Appliance {
        id: ApplianceKind::AirFryer,
        label: "Air Fryer",
        icon: "fa-fan",
        color: "bg-orange-500",
    },
    Appliance {
        id: ApplianceKind::Microondas,
        label: "Microondas",
        icon: "fa-wave-square",
        color: "bg-purple-500",
    },
    Appliance {
        id: ApplianceKind::FornoEletrico,
        label: "Forno Elétrico",
        icon: "fa-fire-burner",
        color: "bg-red-500",
    },
];

static GENERIC_SYMPTOMS: [Symptom; 3] = [
    symptom("nao-liga", "Não liga / Morto", "fa-power-off"),
    symptom("faz-barulho", "Barulho estranho", "fa-volume-high"),
    symptom(
        "painel-nao-responde",
        "Painel travado/não responde",
        "fa-keyboard",
    ),
];

static LAVADORA_SYMPTOMS: [Symptom; 4] = [
    symptom("nao-centrifuga", "Não centrifuga", "fa-rotate"),
    symptom("nao-solta-agua", "Não joga água fora", "fa-droplet-slash"),
    symptom("vazamento-agua", "Vazando água por baixo", "fa-faucet-drip"),
    symptom("balanca-muito", "Balança/Pula muito", "fa-arrows-left-right"),
];

static GELADEIRA_SYMPTOMS: [Symptom; 4] = [
    symptom(
        "nao-gela-embaixo",
        "Gela em cima, mas não embaixo",
        "fa-temperature-arrow-down",
    ),
    symptom(
        "vazando-agua-dentro",
        "Vazando água dentro (gavetas)",
        "fa-droplet",
    ),
    symptom("formando-gelo", "Formando gelo em excesso", "fa-icicles"),
    symptom(
        "estalos-fortes",
        "Estalos fortes constantes",
        "fa-bolt-lightning",
    ),
];

static AR_CONDICIONADO_SYMPTOMS: [Symptom; 4] = [
    symptom(
        "pingando-dentro",
        "Pingando água dentro de casa",
        "fa-droplet",
    ),
    symptom("cheiro-ruim", "Cheiro de mofo ou queimado", "fa-nose-smell"),
    symptom("nao-gela-esquenta", "Não gela o ambiente", "fa-snowflake"),
    symptom(
        "desliga-sozinho",
        "Desliga sozinho após minutos",
        "fa-stopwatch",
    ),
];

static AIR_FRYER_SYMPTOMS: [Symptom; 3] = [
    symptom("nao-esquenta", "Liga mas não esquenta", "fa-fire-dash"),
    symptom("timer-travado", "Timer não gira/não para", "fa-clock"),
    symptom("fumaça-muita", "Fumaça branca em excesso", "fa-smog"),
];

static MICROONDAS_SYMPTOMS: [Symptom; 3] = [
    symptom("prato-nao-gira", "Prato não gira", "fa-rotate-right"),
    symptom("soltando-faisca", "Soltando faíscas dentro", "fa-bolt"),
    symptom("nao-aquece", "Funciona mas não aquece", "fa-hot-tub-person"),
];

static FORNO_ELETRICO_SYMPTOMS: [Symptom; 3] = [
    symptom("assando-desigual", "Assa mais de um lado", "fa-chart-pie"),
    symptom("porta-nao-fecha", "Porta não fecha direito", "fa-door-closed"),
    symptom("luz-queimada", "Luz interna não acende", "fa-lightbulb"),
];

const fn symptom(id: &'static str, label: &'static str, icon: &'static str) -> Symptom {
    Symptom { id, label, icon }
}

/// All catalog appliances, in wizard order.
#[must_use]
pub fn appliances() -> &'static [Appliance] {
    &APPLIANCES
}

/// Look up the catalog entry for an appliance.
#[must_use]
pub fn appliance(kind: ApplianceKind) -> &'static Appliance {
    // same order as ApplianceKind::ALL
    let index = match kind {
        ApplianceKind::Lavadora => 0,
        ApplianceKind::Geladeira => 1,
        ApplianceKind::ArCondicionado => 2,
        ApplianceKind::AirFryer => 3,
        ApplianceKind::Microondas => 4,
        ApplianceKind::FornoEletrico => 5,
    };
    &APPLIANCES[index]
}

/// The symptoms shared by every appliance.
#[must_use]
pub fn generic_symptoms() -> &'static [Symptom] {
    &GENERIC_SYMPTOMS
}

/// The symptoms specific to one appliance.
#[must_use]
pub fn specific_symptoms(kind: ApplianceKind) -> &'static [Symptom] {
    match kind {
        ApplianceKind::Lavadora => &LAVADORA_SYMPTOMS,
        ApplianceKind::Geladeira => &GELADEIRA_SYMPTOMS,
        ApplianceKind::ArCondicionado => &AR_CONDICIONADO_SYMPTOMS,
        ApplianceKind::AirFryer => &AIR_FRYER_SYMPTOMS,
        ApplianceKind::Microondas => &MICROONDAS_SYMPTOMS,
        ApplianceKind::FornoEletrico => &FORNO_ELETRICO_SYMPTOMS,
    }
}

/// Symptoms offered for an appliance: specific ones first, then the generic set.
#[must_use]
pub fn symptoms_for(kind: ApplianceKind) -> Vec<Symptom> {
    specific_symptoms(kind)
        .iter()
        .chain(generic_symptoms())
        .copied()
        .collect()
}

/// Find a symptom offered for `kind` by id.
#[must_use]
pub fn find_symptom(kind: ApplianceKind, symptom_id: &str) -> Option<Symptom> {
    specific_symptoms(kind)
        .iter()
        .chain(generic_symptoms())
        .find(|s| s.id == symptom_id)
        .copied()
}

/// Build the composite lookup key for the diagnosis table.
#[must_use]
pub fn diagnosis_key(kind: ApplianceKind, symptom_id: &str) -> String {
    format!("{kind}-{symptom_id}")
}

/// Look up a canned diagnosis by exact key. `None` on a miss.
#[must_use]
pub fn base_diagnosis(key: &str) -> Option<&'static Diagnosis> {
    BASE_DIAGNOSES.get(key)
}

/// The designated catch-all diagnosis returned for every unmatched key.
#[must_use]
pub fn default_diagnosis() -> &'static Diagnosis {
    &DEFAULT_DIAGNOSIS
}

/// Keys of every configured (non-default) entry.
#[must_use]
pub fn diagnosis_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = BASE_DIAGNOSES.keys().copied().collect();
    keys.sort_unstable();
    keys
}

fn canned(causes: &[(&str, u8)], cost_level: CostLevel, cost_range: &str, tip: &str) -> Diagnosis {
    Diagnosis {
        causes: causes
            .iter()
            .map(|(description, percentage)| Cause::new(*description, *percentage))
            .collect(),
        cost_level,
        cost_range: cost_range.to_string(),
        tip: tip.to_string(),
        detailed_ai: None,
    }
}

static DEFAULT_DIAGNOSIS: LazyLock<Diagnosis> = LazyLock::new(|| {
    canned(
        &[
            ("Falha em componente eletrônico interno", 50),
            ("Fiação solta ou mau contato por vibração", 30),
            ("Necessidade de higienização técnica", 20),
        ],
        CostLevel::Medium,
        "R$ 150 a R$ 500",
        "Este sintoma sugere uma falha intermitente. Um técnico deve realizar testes de continuidade.",
    )
});

static BASE_DIAGNOSES: LazyLock<HashMap<&'static str, Diagnosis>> = LazyLock::new(|| {
    HashMap::from([
        (
            "lavadora-nao-liga",
            canned(
                &[
                    ("Problema na tomada ou disjuntor", 45),
                    ("Cabo de força danificado", 25),
                    ("Placa eletrônica principal queimada", 20),
                    ("Microchave da tampa com defeito", 10),
                ],
                CostLevel::Low,
                "R$ 80 a R$ 450",
                "Teste a tomada com um secador de cabelo ou carregador de celular primeiro.",
            ),
        ),
        (
            "lavadora-nao-centrifuga",
            canned(
                &[
                    ("Atuador de freio com defeito", 40),
                    ("Capacitor do motor esgotado", 30),
                    ("Eixo ou rolamentos travados", 20),
                    ("Sensor de balanceamento ativado", 10),
                ],
                CostLevel::Medium,
                "R$ 150 a R$ 550",
                "Verifique se a roupa não está acumulada apenas de um lado do cesto.",
            ),
        ),
        (
            "lavadora-nao-solta-agua",
            canned(
                &[
                    ("Eletrobomba de drenagem queimada", 60),
                    ("Objeto travando a hélice da bomba", 25),
                    ("Mangueira de saída dobrada ou entupida", 15),
                ],
                CostLevel::Low,
                "R$ 120 a R$ 280",
                "Limpe o filtro de detritos que fica na parte inferior (se o modelo possuir).",
            ),
        ),
        (
            "geladeira-nao-gela-embaixo",
            canned(
                &[
                    ("Bloqueio de gelo no duto de ar", 50),
                    ("Motor do ventilador (froz-free) parado", 25),
                    ("Resistência de degelo queimada", 15),
                    ("Sensor de temperatura descalibrado", 10),
                ],
                CostLevel::Medium,
                "R$ 180 a R$ 600",
                "Desligue da tomada por 24h com as portas abertas. Se voltar a gelar, o problema é no sistema de degelo.",
            ),
        ),
        (
            "geladeira-vazando-agua-dentro",
            canned(
                &[
                    ("Dreno de degelo entupido", 80),
                    ("Calha de escoamento desalinhada", 15),
                    ("Vedação da porta (borracha) gasta", 5),
                ],
                CostLevel::Low,
                "R$ 50 a R$ 150",
                "Tente passar um arame flexível ou canudo no furo do dreno atrás das gavetas de legumes.",
            ),
        ),
        (
            "ar-condicionado-pingando-dentro",
            canned(
                &[
                    ("Dreno obstruído por sujeira/lodo", 70),
                    ("Filtros excessivamente sujos", 20),
                    ("Instalação sem a inclinação correta", 10),
                ],
                CostLevel::Low,
                "R$ 100 a R$ 250",
                "Uma limpeza profissional (manutenção preventiva) resolve 90% dos casos de vazamento.",
            ),
        ),
        (
            "ar-condicionado-nao-gela-esquenta",
            canned(
                &[
                    ("Falta de gás (vazamento no sistema)", 45),
                    ("Capacitor da unidade externa estourado", 30),
                    ("Compressor não está partindo", 15),
                    ("Sensores de serpentina com erro", 10),
                ],
                CostLevel::High,
                "R$ 250 a R$ 900",
                "Verifique se a unidade externa (condensadora) está ligando quando você coloca no modo \"Cool\".",
            ),
        ),
        (
            "microondas-nao-aquece",
            canned(
                &[
                    ("Magnetron com defeito (não emite ondas)", 60),
                    ("Capacitor de alta tensão em curto", 20),
                    ("Diodo de alta tensão queimado", 15),
                    ("Relé da placa principal falhando", 5),
                ],
                CostLevel::Medium,
                "R$ 180 a R$ 450",
                "Cuidado! Mesmo desligado, o microondas retém carga elétrica mortal no capacitor.",
            ),
        ),
        (
            "microondas-soltando-faisca",
            canned(
                &[
                    ("Placa de mica (guia de ondas) suja/queimada", 75),
                    ("Pintura interna descascada", 20),
                    ("Uso de utensílios metálicos", 5),
                ],
                CostLevel::Low,
                "R$ 40 a R$ 120",
                "Troque a placa de mica imediatamente. Se continuar usando, vai queimar o Magnetron.",
            ),
        ),
        (
            "air-fryer-nao-esquenta",
            canned(
                &[
                    ("Fusível térmico de segurança aberto", 65),
                    ("Resistência circular interrompida", 20),
                    ("Termostato mecânico quebrado", 15),
                ],
                CostLevel::Low,
                "R$ 80 a R$ 220",
                "Evite usar a Air Fryer em tomadas junto com outros aparelhos potentes.",
            ),
        ),
    ])
});
