/// Configuration for relation generation
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace of the generated model classes, e.g. `App\Models`
    pub model_namespace: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_namespace: "App".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model namespace
    pub fn model_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.model_namespace = namespace.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_app_namespace() {
        assert_eq!(Config::new().model_namespace, "App");
        assert_eq!(
            Config::new().model_namespace(r"App\Models").model_namespace,
            r"App\Models"
        );
    }
}
