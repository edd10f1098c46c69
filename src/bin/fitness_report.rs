//! Print every metric computable from basic body measurements
//! Usage: cargo run --bin fitness_report -- <weight_kg> <height_cm> <age> [male|female]

use trainify::fitness::{
    calculate, BmiForm, BmrForm, IdealWeightForm, OneRepMaxForm, TdeeForm, WaterForm,
};
use trainify::models::{ActivityFactor, CalculatorKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        let program = args.first().map_or("fitness_report", String::as_str);
        return Err(format!(
            "Usage: {} <weight_kg> <height_cm> <age> [male|female]",
            program
        )
        .into());
    }

    let weight = args[1].clone();
    let height = args[2].clone();
    let age = args[3].clone();
    let sex = args.get(4).cloned().unwrap_or_default();

    let bmi = calculate(&BmiForm {
        weight: weight.clone(),
        height: height.clone(),
    });
    print_line(CalculatorKind::Bmi.title(), bmi.map(|r| r.summary()));

    let bmr = calculate(&BmrForm {
        weight: weight.clone(),
        height: height.clone(),
        age: age.clone(),
        sex: sex.clone(),
    });
    print_line(CalculatorKind::Bmr.title(), bmr.map(|r| r.summary()));

    println!("{}:", CalculatorKind::Tdee.title());
    for level in ActivityFactor::ALL {
        let tdee = calculate(&TdeeForm {
            weight: weight.clone(),
            height: height.clone(),
            age: age.clone(),
            sex: sex.clone(),
            activity: level.as_str().to_string(),
        });
        print_line(&format!("  {}", level.display_name()), tdee.map(|r| r.summary()));
    }

    let ideal = calculate(&IdealWeightForm {
        height: height.clone(),
        sex: sex.clone(),
    });
    print_line(CalculatorKind::IdealWeight.title(), ideal.map(|r| r.summary()));

    let water = calculate(&WaterForm {
        weight: weight.clone(),
        activity: String::new(),
    });
    print_line(CalculatorKind::Water.title(), water.map(|r| r.summary()));

    // Bodyweight for 10 reps as a reference lift
    let orm = calculate(&OneRepMaxForm {
        weight,
        reps: "10".to_string(),
    });
    print_line("Bodyweight x10 1RM", orm.map(|r| r.summary()));

    Ok(())
}

fn print_line(label: &str, value: Option<String>) {
    match value {
        Some(v) => println!("{}: {}", label, v),
        None => println!("{}: not computed", label),
    }
}
