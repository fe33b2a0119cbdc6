//! The skills grid: a static catalogue rendered through a pure function of
//! (catalogue, filter, expanded-flag). The returned entry list is everything
//! the shell needs to paint one grid state.

/// Grid cells shown for a category that has not been expanded
pub const VISIBLE_LIMIT: usize = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Programming,
    Mobile,
    DataMl,
}

/// The tab strip above the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,

    /// A skill may sit in more than one category (e.g. Kotlin)
    pub categories: &'static [Category],
    pub icon: &'static str,
}

impl Skill {
    fn matches(
        &self,
        filter: CategoryFilter,
    ) -> bool {
        match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => self.categories.contains(&c),
        }
    }
}

/// One paintable grid cell
#[derive(Debug, PartialEq)]
pub enum GridEntry<'a> {
    Skill(&'a Skill),

    /// The trailing see-all/show-less cell; present only when the filtered
    /// set exceeds `VISIBLE_LIMIT`
    Toggle { expanded: bool, total: usize },
}

impl GridEntry<'_> {
    /// Label of the toggle cell, as shown on the page
    pub fn label(&self) -> Option<String> {
        match self {
            GridEntry::Skill(_) => None,
            GridEntry::Toggle { expanded: true, .. } => Some("Show Less".to_owned()),
            GridEntry::Toggle {
                expanded: false,
                total,
            } => Some(format!("See All ({total})")),
        }
    }
}

/// The full render decision for one (filter, expanded) pair. Pure: click
/// handling and repainting stay with the caller, which re-runs this on every
/// tab switch or toggle.
pub fn render_skills(
    catalogue: &[Skill],
    filter: CategoryFilter,
    expanded: bool,
) -> Vec<GridEntry<'_>> {
    let filtered: Vec<&Skill> = catalogue.iter().filter(|s| s.matches(filter)).collect();
    let total = filtered.len();
    let has_more = total > VISIBLE_LIMIT;

    let shown = match expanded || !has_more {
        true => total,
        false => VISIBLE_LIMIT,
    };

    let mut entries: Vec<GridEntry> = filtered[..shown]
        .iter()
        .map(|s| GridEntry::Skill(*s))
        .collect();
    if has_more {
        entries.push(GridEntry::Toggle { expanded, total });
    }
    entries
}

const fn skill(
    name: &'static str,
    categories: &'static [Category],
    icon: &'static str,
) -> Skill {
    Skill {
        name,
        categories,
        icon,
    }
}

/// The page's catalogue, in display order
pub const CATALOGUE: &[Skill] = &[
    skill("Python", &[Category::Programming], "/images/logo/python_logo.png"),
    skill("Java", &[Category::Programming], "/images/logo/java_logo.png"),
    skill("C++", &[Category::Programming], "/images/logo/cplus_logo.png"),
    skill("Kotlin", &[Category::Programming, Category::Mobile], "/images/logo/kotlin_logo.svg"),
    skill("SQL", &[Category::Programming, Category::DataMl], "/images/logo/MySql_logo.png"),
    skill("DSA", &[Category::Programming], "/images/logo/C_logo.png"),
    skill("Android Studio", &[Category::Mobile], "/images/logo/Android_Studio_logo.png"),
    skill("Firebase", &[Category::Mobile], "/images/logo/Firebase_logo.png"),
    skill("RESTful APIs", &[Category::Programming], "/images/logo/restfulApi_logo.png"),
    skill("Git / GitHub", &[Category::Programming], "/images/logo/github_logo.svg"),
    skill("TensorFlow", &[Category::DataMl], "/images/logo/TensorFlow_logo.png"),
    skill("Scikit-learn", &[Category::DataMl], "/images/logo/scikit_learn_logo.svg"),
    skill("Pandas", &[Category::DataMl], "/images/logo/Pandas_logo.png"),
    skill("Matplotlib", &[Category::DataMl], "/images/logo/Matplotlib_logo.png"),
    skill("Seaborn", &[Category::DataMl], "/images/logo/seaborn_logo.png"),
    skill("HTML", &[Category::Programming], "/images/logo/HTML5_logo.png"),
    skill("CSS", &[Category::Programming], "/images/logo/CSS3_logo.png"),
    skill("JavaScript", &[Category::Programming], "/images/logo/javascript_logo.png"),
    skill("MongoDB", &[Category::DataMl], "/images/logo/Mongodb_logo.png"),
    skill("Jetpack Compose", &[Category::Mobile], "/images/logo/jetpackcompose_logo.png"),
    skill("XML", &[Category::Mobile], "/images/logo/xml_android_logo.png"),
    skill("Bitbucket", &[Category::Programming], "/images/logo/Bitbucket_logo.svg"),
];
