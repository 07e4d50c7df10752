/// An absolute IRI, as found in place of an embedded object.
///
/// The text as read is kept next to the parsed url, so that serializing gives back exactly what
/// was read: `url` would otherwise normalize it (e.g. adding a trailing slash to bare hosts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iri {
	raw: String,
	url: url::Url,
}

impl Iri {
	/// parses `value` as an IRI, only accepting it if it carries a scheme: bare strings like
	/// `file.txt` or `Question` are never considered IRIs
	pub fn parse(value: &str) -> Option<Self> {
		let url = url::Url::parse(value).ok()?;
		if url.scheme().is_empty() {
			return None;
		}
		Some(Iri { raw: value.to_string(), url })
	}

	pub fn as_str(&self) -> &str {
		&self.raw
	}

	pub fn url(&self) -> &url::Url {
		&self.url
	}
}

impl From<url::Url> for Iri {
	fn from(url: url::Url) -> Self {
		Iri { raw: url.to_string(), url }
	}
}

impl TryFrom<&str> for Iri {
	type Error = url::ParseError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Ok(url::Url::parse(value)?.into())
	}
}

impl std::fmt::Display for Iri {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.raw)
	}
}

#[cfg(test)]
mod test {
	use super::Iri;

	#[test]
	fn schemed_strings_are_iris() {
		let iri = Iri::parse("https://example.com/coll").expect("valid iri rejected");
		assert_eq!(iri.as_str(), "https://example.com/coll");
		assert_eq!(iri.url().host_str(), Some("example.com"));
		assert!(Iri::parse("urn:uuid:2b1a3a1e-5bd1-4d5a-8f0e-3f4e0e9b1c11").is_some());
	}

	#[test]
	fn bare_strings_are_not_iris() {
		assert!(Iri::parse("file.txt").is_none());
		assert!(Iri::parse("Question").is_none());
		assert!(Iri::parse("/relative/path").is_none());
		assert!(Iri::parse("").is_none());
	}

	#[test]
	fn raw_text_is_preserved() {
		let iri = Iri::parse("https://example.com").expect("valid iri rejected");
		assert_eq!(iri.to_string(), "https://example.com");
		assert_eq!(iri.url().as_str(), "https://example.com/");
	}
}
