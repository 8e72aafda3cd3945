use crate::cli::parser::Commands;
use crate::core::program::{
    PULLUP_PROGRAM, PUSHUP_PROGRAM, plan_for_cycle_day, program, pullup_plan_for_program_day,
    pushup_plan_for_program_day,
};
use crate::errors::AppResult;
use crate::ui::render;

/// Prints program tables. Without options, everything is printed.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Plan {
        cycle_day,
        pullup_day,
        pushup_day,
    } = cmd
    {
        let selective = cycle_day.is_some() || pullup_day.is_some() || pushup_day.is_some();

        if let Some(d) = cycle_day {
            render::print_plan(plan_for_cycle_day(*d));
        }
        if let Some(d) = pullup_day {
            render::print_ladder_day("Pull-ups", &pullup_plan_for_program_day(*d));
        }
        if let Some(d) = pushup_day {
            render::print_ladder_day("Push-ups", &pushup_plan_for_program_day(*d));
        }

        if !selective {
            render::print_program(program());
            println!();
            render::print_ladder_program(&PULLUP_PROGRAM);
            println!();
            render::print_ladder_program(&PUSHUP_PROGRAM);
        }
    }

    Ok(())
}
