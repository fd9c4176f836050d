//! CSV 내보내기.
//!
//! 내보내기는 계산의 부수 기능이므로 실패를 `Result`로만 알리고, 호출자가
//! 경고 후 계속 진행할지 결정한다.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cycle::gas_turbine::GAS_TURBINE_STATION_LABELS;
use crate::cycle::steam::STEAM_STATION_LABELS;
use crate::cycle::StatePoint;
use crate::hrsg::{Hrsg, HrsgError};
use crate::plant::PlantReport;
use crate::units::{from_bar, from_celsius, PressureUnit, TemperatureUnit};

/// CSV 출력 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
}

impl Default for ExportUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::Bar,
        }
    }
}

/// 내보내기 오류.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV 저장 실패 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Hrsg(#[from] HrsgError),
}

/// 상태점 표. 한 행이 한 상태점이다.
pub fn state_table(labels: &[&str], states: &[StatePoint], units: ExportUnits) -> String {
    let mut csv = format!(
        "station,temperature [{}],pressure [{}],enthalpy [kJ/kg],entropy [kJ/kgK]\n",
        units.temperature.symbol(),
        units.pressure.symbol()
    );
    for (label, st) in labels.iter().zip(states) {
        let _ = writeln!(
            csv,
            "{},{},{},{},{}",
            label,
            from_celsius(st.temperature_c, units.temperature),
            from_bar(st.pressure_bar, units.pressure),
            st.enthalpy,
            st.entropy
        );
    }
    csv
}

/// 일·열량 표와 유량 표.
pub fn energy_table(energy: &[(&str, f64)], mass_flows: &[(&str, f64)]) -> String {
    let mut csv = String::from("name,value [kW]\n");
    for (name, value) in energy {
        let _ = writeln!(csv, "{name},{value}");
    }
    if !mass_flows.is_empty() {
        csv.push_str("Mass Flow Rates,[kg/s]\n");
        for (name, value) in mass_flows {
            let _ = writeln!(csv, "{name},{value}");
        }
    }
    csv
}

/// HRSG 열교환기 표. 체인이 계산되지 않았으면 오류.
pub fn hrsg_table(hrsg: &Hrsg, temperature: TemperatureUnit) -> Result<String, HrsgError> {
    let unit = temperature.symbol();
    let mut csv = format!(
        "name,flue gas in [{unit}],flue gas out [{unit}],steam in [{unit}],steam out [{unit}],mass flow [kg/s],duty [kW]\n"
    );
    for ex in hrsg.exchangers() {
        let r = ex.result()?;
        let spec = ex.spec();
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{}",
            ex.name(),
            from_celsius(r.hot_in_c, temperature),
            from_celsius(r.hot_out_c, temperature),
            from_celsius(spec.cold_in_c, temperature),
            from_celsius(spec.cold_out_c, temperature),
            spec.cold_mass_flow,
            r.duty_kw
        );
    }
    Ok(csv)
}

/// 파일 하나를 쓴다.
pub fn write_table(path: &Path, content: &str) -> Result<(), ExportError> {
    fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// 플랜트 결과 전체를 `dir` 아래 CSV 파일들로 저장하고 경로 목록을 돌려준다.
pub fn export_report(
    report: &PlantReport,
    dir: &Path,
    units: ExportUnits,
) -> Result<Vec<PathBuf>, ExportError> {
    let steam = &report.steam_cycle;
    let gt = &report.gas_turbine;
    let tables = [
        (
            "gas_turbine.csv",
            state_table(&GAS_TURBINE_STATION_LABELS, gt.states(), units),
        ),
        ("gas_turbine_work.csv", energy_table(&gt.work().rows(), &[])),
        (
            "steam_data.csv",
            state_table(&STEAM_STATION_LABELS, steam.states(), units),
        ),
        (
            "work_data.csv",
            energy_table(&steam.energy().rows(), &steam.flows().rows()),
        ),
        ("hrsg.csv", hrsg_table(&report.hrsg, units.temperature)?),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (file, content) in tables {
        let path = dir.join(file);
        write_table(&path, &content)?;
        written.push(path);
    }
    Ok(written)
}
