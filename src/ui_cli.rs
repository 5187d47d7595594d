//! 계산 결과를 터미널에 출력한다. 서식만 담당하며 계산은 하지 않는다.

use crate::heat_pump::{MatchResult, PowerModel, ProductFamily};
use crate::thermal::{LossBreakdown, LossResult};
use crate::units::{convert_power, PowerUnit};

fn fmt_power(kw: f64, unit: PowerUnit) -> String {
    let value = convert_power(kw, PowerUnit::Kilowatt, unit);
    format!("{value:.2} {}", unit.symbol())
}

/// 열손실 결과를 출력한다.
pub fn print_loss(result: &LossResult, unit: PowerUnit) {
    println!("\n=== 설계 열손실 ===");
    println!("합계: {}", fmt_power(result.total_loss_kw, unit));
    match &result.breakdown {
        Some(b) => print_breakdown(b),
        None => println!("(입력된 열손실 값 사용, 부위별 내역 없음)"),
    }
}

fn print_breakdown(b: &LossBreakdown) {
    println!("부위별 손실 [W/K]:");
    println!("  벽     {:>10.2}", b.wall);
    println!("  창     {:>10.2}", b.window);
    println!("  지붕   {:>10.2}", b.roof);
    println!("  바닥   {:>10.2}", b.floor);
    println!("  환기   {:>10.2}", b.air_renewal);
    println!("  열교   {:>10.2}", b.thermal_bridge);
    println!("  합계   {:>10.2}", b.total());
}

/// 선정된 제품 목록을 출력한다.
pub fn print_matches(matches: &[MatchResult<'_>], unit: PowerUnit) {
    println!("\n=== 적합 제품 ({}) ===", matches.len());
    if matches.is_empty() {
        println!("조건에 맞는 제품이 없습니다.");
        return;
    }
    for m in matches {
        let kind = match m.entry.family {
            ProductFamily::Discrete { .. } => "개별 모델",
            ProductFamily::Cascade(_) => "캐스케이드",
        };
        println!("- {} [{kind}]", m.entry.name);
        println!("    기본 모델: {}", describe_model(&m.default_model, unit));
        for model in m.compatible_models.iter().skip(1) {
            println!("    대안:      {}", describe_model(model, unit));
        }
    }
}

fn describe_model(model: &PowerModel, unit: PowerUnit) -> String {
    format!(
        "{} (난방 {}, 냉방 {}, 소비 {}, COP {:.2}, ETAS {:.0}%)",
        model.model_id,
        fmt_power(model.calorific_power_kw, unit),
        fmt_power(model.frigorific_power_kw, unit),
        fmt_power(model.absorbed_power_kw, unit),
        model.cop,
        model.etas
    )
}
