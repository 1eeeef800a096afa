use crate::prelude::menagerie;
use vario_core::{explain, Checker, GenericDecl};

/// One teaching script's worth of output: a title, the point it makes, and
/// the checker verdicts it walks through.
pub struct LessonReport {
    pub title: String,
    pub commentary: String,
    pub lines: Vec<String>,
}

impl LessonReport {
    fn new(title: &str, commentary: &str) -> Self {
        Self {
            title: title.to_string(),
            commentary: commentary.to_string(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// A read-only list of cats may stand in for a read-only list of animals.
pub fn covariance() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);
    let list = GenericDecl::covariant("ReadOnlyList");

    let required = list.instantiate(vec!["Animal"])?;
    let offered = list.instantiate(vec!["Cat"])?;
    let verdict = checker.check(&list, &required, &offered)?;

    let mut report = LessonReport::new(
        "covariance",
        "A covariant slot lets the offered type narrow: values only flow \
         out of a ReadOnlyList, so every Cat it yields is an Animal.",
    );

    report.push(explain(&verdict));

    Ok(report)
}

/// A consumer of animals may stand in for a consumer of cats.
pub fn contravariance() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);
    let consumer = GenericDecl::contravariant("Consumer");

    let required = consumer.instantiate(vec!["Cat"])?;
    let offered = consumer.instantiate(vec!["Animal"])?;
    let verdict = checker.check(&consumer, &required, &offered)?;

    let mut report = LessonReport::new(
        "contravariance",
        "A contravariant slot reverses the direction: feed_cat only ever \
         hands the consumer a Cat, and a Consumer[Animal] accepts any Cat.",
    );

    report.push(explain(&verdict));

    Ok(report)
}

/// A plain mutable list admits no substitution in either direction.
pub fn invariance() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);
    let list = GenericDecl::invariant("List");

    let required = list.instantiate(vec!["Animal"])?;
    let offered = list.instantiate(vec!["Cat"])?;
    let verdict = checker.check(&list, &required, &offered)?;

    let mut report = LessonReport::new(
        "invariance",
        "List is read-write, so List[Cat] is not a List[Animal]: the callee \
         could push a Dog into it.",
    );

    report.push(explain(&verdict));

    Ok(report)
}

/// Function parameters check contravariantly and the return covariantly, so
/// (Animal) -> str fits where (Cat) -> object is wanted.
pub fn callable() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);
    let shape = GenericDecl::function("Callable", 1);

    let required = shape.instantiate(vec!["Cat", "object"])?;
    let offered = shape.instantiate(vec!["Animal", "str"])?;
    let verdict = checker.check(&shape, &required, &offered)?;

    let mut report = LessonReport::new(
        "callable",
        "animal_to_str takes any Animal and returns a str; a caller who \
         promises a Cat and expects an object is more than satisfied.",
    );

    report.push(explain(&verdict));

    Ok(report)
}

/// Processor reads and writes its parameter, so it is invariant and the
/// assignment the source example attempts is rejected outright.
pub fn mixed() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);
    let processor = GenericDecl::invariant("Processor");

    let required = processor.instantiate(vec!["Animal"])?;
    let offered = processor.instantiate(vec!["Cat"])?;
    let verdict = checker.check(&processor, &required, &offered)?;

    let mut report = LessonReport::new(
        "mixed",
        "Processor both gets and sets its value. Reading alone would allow \
         covariance, writing alone contravariance; together they force \
         invariance and the assignment fails.",
    );

    report.push(explain(&verdict));

    Ok(report)
}

/// practices/one: a shelter that only hands animals out wants a covariant
/// parameter; without the annotation the checker refuses the cat shelter.
pub fn practice_one() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);

    let mut report = LessonReport::new(
        "practice one",
        "Shelter only exposes get_animals, yet declared invariant it \
         rejects Shelter[Cat]. Marking the parameter covariant fixes it.",
    );

    let broken = GenericDecl::invariant("Shelter");
    let required = broken.instantiate(vec!["Animal"])?;
    let offered = broken.instantiate(vec!["Cat"])?;
    let verdict = checker.check(&broken, &required, &offered)?;

    report.push(format!("before: {}", explain(&verdict)));

    let fixed = GenericDecl::covariant("Shelter");
    let required = fixed.instantiate(vec!["Animal"])?;
    let offered = fixed.instantiate(vec!["Cat"])?;
    let verdict = checker.check(&fixed, &required, &offered)?;

    report.push(format!("after: {}", explain(&verdict)));

    Ok(report)
}

/// practices/two: a non-generic processor is given a type argument, then the
/// answer makes it generic and contravariant so the wide processor fits.
pub fn practice_two() -> eyre::Result<LessonReport> {
    let hierarchy = menagerie();
    let checker = Checker::new(&hierarchy);

    let mut report = LessonReport::new(
        "practice two",
        "AnimalProcessor starts out non-generic, so AnimalProcessor[Animal] \
         is ill-formed. The answer declares a contravariant parameter \
         bounded to what the processor consumes.",
    );

    let broken = GenericDecl::declare("AnimalProcessor", vec![], false)?;
    match broken.instantiate(vec!["Animal"]) {
        Err(e) => report.push(format!("before: error: {}  [type-arg]", e)),
        Ok(_) => unreachable!("a zero-slot declaration accepted a type argument"),
    }

    let fixed = GenericDecl::contravariant("AnimalProcessor");
    let required = fixed.instantiate(vec!["Cat"])?;
    let offered = fixed.instantiate(vec!["Animal"])?;
    let verdict = checker.check(&fixed, &required, &offered)?;

    report.push(format!("after: {}", explain(&verdict)));

    Ok(report)
}

/// The lessons in the order the original entry point runs them.
pub fn run_all() -> eyre::Result<Vec<LessonReport>> {
    Ok(vec![
        covariance()?,
        contravariance()?,
        invariance()?,
        callable()?,
        mixed()?,
    ])
}

/// The two practice exercises, each showing the broken form and its answer.
pub fn practices() -> eyre::Result<Vec<LessonReport>> {
    Ok(vec![practice_one()?, practice_two()?])
}

pub fn lesson_names() -> &'static [&'static str] {
    &[
        "covariance",
        "contravariance",
        "invariance",
        "callable",
        "mixed",
        "practice-one",
        "practice-two",
    ]
}

/// Looks a lesson up by its CLI name.
pub fn find(name: &str) -> Option<eyre::Result<LessonReport>> {
    match name {
        "covariance" => Some(covariance()),
        "contravariance" => Some(contravariance()),
        "invariance" => Some(invariance()),
        "callable" => Some(callable()),
        "mixed" => Some(mixed()),
        "practice-one" => Some(practice_one()),
        "practice-two" => Some(practice_two()),
        _ => None,
    }
}
