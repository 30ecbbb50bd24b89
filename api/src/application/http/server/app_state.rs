use std::sync::Arc;

use mealscore_core::application::MealScoreService;
use minijinja::Environment;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<MealScoreService>,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealScoreService, templates: Environment<'static>) -> Self {
        Self {
            args,
            service: Arc::new(service),
            templates: Arc::new(templates),
        }
    }
}
