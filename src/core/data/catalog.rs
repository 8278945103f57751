use std::fmt;

use xmltree::XMLNode;

/// A translation catalog for one target locale (the `<TS>` root element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Format version, e.g. `2.0` or `2.1`.
    pub version: Option<String>,
    /// Target locale, e.g. `sv_SE`.
    pub language: Option<String>,
    /// Language of the source texts, usually absent (meaning English).
    pub source_language: Option<String>,
    /// Contexts in document order. Names are unique after parsing.
    pub contexts: Vec<Context>,
    /// XML comments ahead of the `<TS>` root.
    pub prolog: Vec<XMLNode>,
    /// Root children the model has no field for (`<dependencies>`,
    /// `<defaultcodec>`, `extra-*`, comments), kept so rewrites don't lose them.
    pub extras: Vec<XMLNode>,
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            version: Some("2.1".to_string()),
            language: Some(language.into()),
            source_language: None,
            contexts: Vec::new(),
            prolog: Vec::new(),
            extras: Vec::new(),
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Get a context by name, appending an empty one if it doesn't exist yet.
    pub fn context_mut(&mut self, name: &str) -> &mut Context {
        let index = match self.contexts.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.contexts.push(Context::new(name));
                self.contexts.len() - 1
            }
        };
        &mut self.contexts[index]
    }

    /// All messages paired with their context, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    /// Total number of messages, including obsolete ones.
    pub fn len(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove obsolete and vanished messages, then drop contexts left empty.
    ///
    /// Returns the number of removed messages.
    pub fn purge_obsolete(&mut self) -> usize {
        let before = self.len();
        for ctx in &mut self.contexts {
            ctx.messages.retain(Message::is_active);
        }
        self.contexts.retain(|c| !c.messages.is_empty());
        before - self.len()
    }

    /// Drop line numbers from every location, keeping the file names.
    ///
    /// Returns the number of locations that carried a line number.
    pub fn strip_location_lines(&mut self) -> usize {
        let mut stripped = 0;
        for loc in self
            .contexts
            .iter_mut()
            .flat_map(|ctx| ctx.messages.iter_mut())
            .flat_map(|msg| msg.locations.iter_mut())
        {
            if loc.line.take().is_some() {
                stripped += 1;
            }
        }
        stripped
    }
}

/// A named group of messages belonging to one UI component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<Message>,
    pub extras: Vec<XMLNode>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            messages: Vec::new(),
            extras: Vec::new(),
        }
    }
}

/// One translatable unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: Option<String>,
    /// English source text, the lookup key.
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguation, part of the lookup key.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Note for translators written by developers (`<extracomment>`).
    pub extra_comment: Option<String>,
    /// Note written by translators (`<translatorcomment>`).
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    pub translation: Translation,
    /// Unknown children such as `extra-*` elements, written after the translation.
    pub extras: Vec<XMLNode>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Whether the message is still referenced by the application.
    pub fn is_active(&self) -> bool {
        self.translation.status.is_active()
    }

    pub fn status(&self) -> TranslationStatus {
        self.translation.status
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation.text, TranslationText::Plural(_))
    }

    /// Singular text, or the first plural form.
    pub fn translation_text(&self) -> &str {
        match &self.translation.text {
            TranslationText::Singular(text) => text,
            TranslationText::Plural(forms) => forms.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Every translated string the message carries (one for singular messages).
    pub fn translation_forms(&self) -> Vec<&str> {
        match &self.translation.text {
            TranslationText::Singular(text) => vec![text.as_str()],
            TranslationText::Plural(forms) => forms.iter().map(String::as_str).collect(),
        }
    }

    /// True if there is no translated text at all.
    pub fn is_untranslated(&self) -> bool {
        self.translation_forms().iter().all(|f| f.is_empty())
    }
}

/// Translated text plus its status flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub status: TranslationStatus,
    pub text: TranslationText,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            text: TranslationText::Singular(text.into()),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            text: TranslationText::Singular(text.into()),
        }
    }

    pub fn obsolete(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Obsolete,
            text: TranslationText::Singular(text.into()),
        }
    }

    pub fn plural(status: TranslationStatus, forms: Vec<String>) -> Self {
        Self {
            status,
            text: TranslationText::Plural(forms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    Singular(String),
    /// Plural forms (`<numerusform>`) in the order of the language's plural rule.
    Plural(Vec<String>),
}

impl Default for TranslationText {
    fn default() -> Self {
        TranslationText::Singular(String::new())
    }
}

/// The `type` attribute of `<translation>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TranslationStatus {
    /// No `type` attribute.
    #[default]
    Finished,
    Unfinished,
    Obsolete,
    /// Newer spelling of obsolete.
    Vanished,
}

impl TranslationStatus {
    pub fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(Self::Finished),
            Some("unfinished") => Some(Self::Unfinished),
            Some("obsolete") => Some(Self::Obsolete),
            Some("vanished") => Some(Self::Vanished),
            Some(_) => None,
        }
    }

    pub fn as_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Finished | Self::Unfinished)
    }
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr().unwrap_or("finished"))
    }
}

/// A source-location hint. Informational only, never part of a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Omitted by the extraction tool when it equals the previous location's file.
    pub filename: Option<String>,
    pub line: Option<LineRef>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: u32) -> Self {
        Self {
            filename: Some(filename.into()),
            line: Some(LineRef::Absolute(line)),
        }
    }
}

/// Line attribute of a location: absolute (`12`) or relative to the previous one (`+3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRef {
    Absolute(u32),
    Relative(i32),
}

impl LineRef {
    pub fn parse(value: &str) -> Option<Self> {
        if value.starts_with('+') || value.starts_with('-') {
            value.parse().ok().map(Self::Relative)
        } else {
            value.parse().ok().map(Self::Absolute)
        }
    }
}

impl fmt::Display for LineRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineRef::Absolute(line) => write!(f, "{}", line),
            LineRef::Relative(delta) => write!(f, "{:+}", delta),
        }
    }
}

/// Owned `(context, source, disambiguation)` lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageKey {
    pub fn new(context: impl Into<String>, source: impl Into<String>, comment: Option<&str>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.map(str::to_string),
        }
    }

    pub fn of(context: &Context, message: &Message) -> Self {
        Self::new(&context.name, &message.source, message.comment.as_deref())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.comment {
            Some(comment) => write!(f, "{}::{} ({})", self.context, self.source, comment),
            None => write!(f, "{}::{}", self.context, self.source),
        }
    }
}
