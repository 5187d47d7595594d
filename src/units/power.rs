use serde::{Deserialize, Serialize};

/// 출력(열량) 단위. 내부 기준은 kW이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PowerUnit {
    #[default]
    Kilowatt,
    Watt,
    BtuPerHour,
}

impl PowerUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Watt => "W",
            PowerUnit::BtuPerHour => "BTU/h",
        }
    }
}

fn to_base(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value / 1000.0,
        PowerUnit::BtuPerHour => value / 3412.142,
    }
}

fn from_base(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kilowatt => value,
        PowerUnit::Watt => value * 1000.0,
        PowerUnit::BtuPerHour => value * 3412.142,
    }
}

/// 출력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
