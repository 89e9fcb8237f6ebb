use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::models::form::ProgramFormData;
use crate::models::program::Program;
use crate::services::five_three_one::generate_531_program;
use crate::services::generic_program::generate_generic_program;

/// Turns questionnaire answers into a program. Pure: no I/O, same input, same output.
pub fn generate_program(catalog: &Catalog, form: &ProgramFormData) -> Program {
    if form.objective.is_percentage_based() {
        generate_531_program(catalog, form)
    } else {
        generate_generic_program(catalog, form)
    }
}

#[derive(Clone)]
pub struct ProgramGenerator {
    catalog: Arc<Catalog>,
}

impl ProgramGenerator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generate(&self, form: &ProgramFormData) -> Program {
        let program = generate_program(&self.catalog, form);

        if program.is_error() {
            warn!(
                objective = %form.objective,
                title = %program.title,
                "program.generation_rejected"
            );
        } else {
            info!(
                objective = %form.objective,
                training_days = form.training_days,
                is_531 = program.is_531,
                "program.generated"
            );
        }

        program
    }
}
