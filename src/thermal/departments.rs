//! 데파르트망(행정구역)별 난방 설계 외기온도 테이블.
//! 고도 보정 없이 구역 기준값만 담는다.

/// 코드가 없거나 표에 없을 때 사용하는 설계 외기온도 [°C]
pub const DEFAULT_DESIGN_TEMP_C: i32 = -10;

#[derive(Debug, Clone, Copy)]
pub struct Department {
    pub code: &'static str,
    pub name: &'static str,
    /// 설계 외기온도 [°C]
    pub design_temp_c: i32,
}

pub fn departments() -> &'static [Department] {
    DEPARTMENTS
}

/// 입력 코드를 표 형식으로 정리한다. 한 자리 숫자는 앞에 0을 붙인다(`"1"` → `"01"`).
pub fn normalize_code(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    if code.len() == 1 && code.chars().all(|c| c.is_ascii_digit()) {
        format!("0{code}")
    } else {
        code
    }
}

pub fn find_department(code: &str) -> Option<&'static Department> {
    let code = normalize_code(code);
    DEPARTMENTS.iter().find(|d| d.code == code)
}

/// 설계 외기온도를 조회한다. 코드가 없거나 알 수 없으면 -10 °C.
pub fn design_temperature_c(code: Option<&str>) -> f64 {
    let temp = match code.and_then(find_department) {
        Some(dep) => dep.design_temp_c,
        None => {
            if let Some(code) = code {
                tracing::warn!(code, "unknown department code, using default design temperature");
            }
            DEFAULT_DESIGN_TEMP_C
        }
    };
    f64::from(temp)
}

const fn dep(code: &'static str, name: &'static str, design_temp_c: i32) -> Department {
    Department {
        code,
        name,
        design_temp_c,
    }
}

const DEPARTMENTS: &[Department] = &[
    dep("01", "Ain", -10),
    dep("02", "Aisne", -7),
    dep("03", "Allier", -8),
    dep("04", "Alpes-de-Haute-Provence", -8),
    dep("05", "Hautes-Alpes", -10),
    dep("06", "Alpes-Maritimes", -5),
    dep("07", "Ardèche", -6),
    dep("08", "Ardennes", -10),
    dep("09", "Ariège", -5),
    dep("10", "Aube", -10),
    dep("11", "Aude", -5),
    dep("12", "Aveyron", -8),
    dep("13", "Bouches-du-Rhône", -5),
    dep("14", "Calvados", -4),
    dep("15", "Cantal", -8),
    dep("16", "Charente", -5),
    dep("17", "Charente-Maritime", -5),
    dep("18", "Cher", -7),
    dep("19", "Corrèze", -8),
    dep("2A", "Corse-du-Sud", -2),
    dep("2B", "Haute-Corse", -2),
    dep("21", "Côte-d'Or", -10),
    dep("22", "Côtes-d'Armor", -4),
    dep("23", "Creuse", -8),
    dep("24", "Dordogne", -5),
    dep("25", "Doubs", -12),
    dep("26", "Drôme", -6),
    dep("27", "Eure", -7),
    dep("28", "Eure-et-Loir", -7),
    dep("29", "Finistère", -4),
    dep("30", "Gard", -5),
    dep("31", "Haute-Garonne", -5),
    dep("32", "Gers", -5),
    dep("33", "Gironde", -5),
    dep("34", "Hérault", -5),
    dep("35", "Ille-et-Vilaine", -4),
    dep("36", "Indre", -7),
    dep("37", "Indre-et-Loire", -7),
    dep("38", "Isère", -10),
    dep("39", "Jura", -10),
    dep("40", "Landes", -5),
    dep("41", "Loir-et-Cher", -7),
    dep("42", "Loire", -10),
    dep("43", "Haute-Loire", -8),
    dep("44", "Loire-Atlantique", -5),
    dep("45", "Loiret", -7),
    dep("46", "Lot", -6),
    dep("47", "Lot-et-Garonne", -5),
    dep("48", "Lozère", -8),
    dep("49", "Maine-et-Loire", -7),
    dep("50", "Manche", -4),
    dep("51", "Marne", -10),
    dep("52", "Haute-Marne", -12),
    dep("53", "Mayenne", -7),
    dep("54", "Meurthe-et-Moselle", -15),
    dep("55", "Meuse", -12),
    dep("56", "Morbihan", -4),
    dep("57", "Moselle", -15),
    dep("58", "Nièvre", -10),
    dep("59", "Nord", -9),
    dep("60", "Oise", -7),
    dep("61", "Orne", -7),
    dep("62", "Pas-de-Calais", -9),
    dep("63", "Puy-de-Dôme", -8),
    dep("64", "Pyrénées-Atlantiques", -5),
    dep("65", "Hautes-Pyrénées", -5),
    dep("66", "Pyrénées-Orientales", -5),
    dep("67", "Bas-Rhin", -15),
    dep("68", "Haut-Rhin", -15),
    dep("69", "Rhône", -10),
    dep("70", "Haute-Saône", -10),
    dep("71", "Saône-et-Loire", -10),
    dep("72", "Sarthe", -7),
    dep("73", "Savoie", -10),
    dep("74", "Haute-Savoie", -10),
    dep("75", "Paris", -5),
    dep("76", "Seine-Maritime", -7),
    dep("77", "Seine-et-Marne", -7),
    dep("78", "Yvelines", -7),
    dep("79", "Deux-Sèvres", -7),
    dep("80", "Somme", -9),
    dep("81", "Tarn", -5),
    dep("82", "Tarn-et-Garonne", -5),
    dep("83", "Var", -5),
    dep("84", "Vaucluse", -6),
    dep("85", "Vendée", -5),
    dep("86", "Vienne", -7),
    dep("87", "Haute-Vienne", -8),
    dep("88", "Vosges", -15),
    dep("89", "Yonne", -10),
    dep("90", "Territoire-de-Belfort", -15),
    dep("91", "Essonne", -7),
    dep("92", "Hauts-de-Seine", -7),
    dep("93", "Seine-Saint-Denis", -7),
    dep("94", "Val-de-Marne", -7),
    dep("95", "Val-d'Oise", -7),
];
