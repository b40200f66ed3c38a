pub mod cycles;
pub mod damage_control;
pub mod debt;
