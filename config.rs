#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub parser: ParserConfig,

	#[serde(default)]
	pub output: OutputConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ParserConfig {
	#[serde_inline_default(apvocab::DEFAULT_MAX_DEPTH)]
	/// how many embedded objects may nest inside each other before a document is refused
	pub max_depth: usize,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct OutputConfig {
	#[serde_inline_default(true)]
	/// indent printed json
	pub pretty: bool,

	#[serde_inline_default(true)]
	/// add a json-ld @context to normalized documents
	pub context: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}

	pub fn registry(&self) -> apvocab::Registry {
		apvocab::Registry::new().with_max_depth(self.parser.max_depth)
	}
}
