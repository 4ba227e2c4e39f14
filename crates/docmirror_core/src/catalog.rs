/// Literal catalog table: `(source, &[(category, &[url])])`.
pub type StaticCatalog<'a> = &'a [(&'a str, &'a [(&'a str, &'a [&'a str])])];

/// Ordered source -> category -> URLs mapping. Order is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    sources: Vec<SourceSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSection {
    pub name: String,
    pub categories: Vec<CategorySection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub name: String,
    pub urls: Vec<String>,
}

/// One catalog item, borrowed from the catalog it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    pub source: &'a str,
    pub category: &'a str,
    pub url: &'a str,
}

impl SourceSection {
    pub fn new(name: impl Into<String>, categories: Vec<CategorySection>) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }
}

impl CategorySection {
    pub fn new<I, S>(name: impl Into<String>, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}

impl Catalog {
    pub fn new(sources: Vec<SourceSection>) -> Self {
        Self { sources }
    }

    pub fn from_static(table: StaticCatalog<'_>) -> Self {
        let sources = table
            .iter()
            .map(|(source, categories)| {
                let categories = categories
                    .iter()
                    .map(|(category, urls)| CategorySection::new(*category, urls.iter().copied()))
                    .collect();
                SourceSection::new(*source, categories)
            })
            .collect();
        Self { sources }
    }

    pub fn sources(&self) -> &[SourceSection] {
        &self.sources
    }

    /// Every entry in source, then category, then URL order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> + '_ {
        self.sources.iter().flat_map(|source| {
            source.categories.iter().flat_map(move |category| {
                category.urls.iter().map(move |url| CatalogEntry {
                    source: &source.name,
                    category: &category.name,
                    url,
                })
            })
        })
    }

    /// Every `(source, category)` pair, including categories without URLs.
    pub fn category_paths(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.sources.iter().flat_map(|source| {
            source
                .categories
                .iter()
                .map(move |category| (source.name.as_str(), category.name.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.sources
            .iter()
            .flat_map(|source| source.categories.iter())
            .map(|category| category.urls.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
