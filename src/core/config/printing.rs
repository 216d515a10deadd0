use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset, {})", self.theme_mode()),
        }
        match &self.search_engine {
            Some(engine) => println!("  search-engine: {engine}"),
            None => println!("  search-engine: (unset, {})", self.search_engine()),
        }
        match &self.model {
            Some(model) => println!("  model: {model}"),
            None => println!("  model: (unset, {})", self.model()),
        }
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: (unset, {})", self.base_url()),
        }
        match self.syntax_enabled() {
            true => println!("  syntax: on"),
            false => println!("  syntax: off"),
        }
    }
}
