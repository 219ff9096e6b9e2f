// Attribute equality: assert that named attributes hold equal values on two objects.
//
// Purpose
// - Compare a control object against a compare object attribute by attribute.
//
// Responsibilities
// - Emit one check per attribute, labelled with the printed attribute name.
// - Emit a "Types are the same" check unless type differences are ignored.
// - Without an explicit list, compare every attribute of the control, in declaration order.
// - Keep comparing after a mismatch; only missing attributes stop the run.
// - Values of different types never match, except a value and `Some` of that value.

use crate::application::errors::FixtureError;
use crate::core::attributes::{AttributeName, Attributes, values_equal};
use crate::core::descriptors::short_type_name;
use crate::core::ports::Reporter;

pub struct Equality<'a, TControl: ?Sized, TCompare: ?Sized> {
    control: &'a TControl,
    compare: &'a TCompare,
    attribute_names: Option<Vec<AttributeName>>,
    ignore_type_mismatch: bool,
}

impl<'a, TControl, TCompare> Equality<'a, TControl, TCompare>
where
    TControl: Attributes + ?Sized,
    TCompare: Attributes + ?Sized,
{
    pub fn build(
        control: &'a TControl,
        compare: &'a TCompare,
        attribute_names: Option<Vec<AttributeName>>,
        ignore_type_mismatch: bool,
    ) -> Self {
        Self {
            control,
            compare,
            attribute_names,
            ignore_type_mismatch,
        }
    }

    pub fn call(&self, reporter: &mut impl Reporter) -> Result<(), FixtureError> {
        let control_type = std::any::type_name::<TControl>();
        let compare_type = std::any::type_name::<TCompare>();

        reporter.enter_context(&format!(
            "Schema Equality: {}, {}",
            short_type_name::<TControl>(),
            short_type_name::<TCompare>()
        ));
        let result = self.compare_all(reporter, control_type, compare_type);
        reporter.exit_context();
        result
    }

    fn compare_all(
        &self,
        reporter: &mut impl Reporter,
        control_type: &str,
        compare_type: &str,
    ) -> Result<(), FixtureError> {
        reporter.detail(&format!("Control Class: {control_type}"));
        reporter.detail(&format!("Compare Class: {compare_type}"));

        if !self.ignore_type_mismatch {
            reporter.test("Types are the same", control_type == compare_type);
        }

        let attribute_names = match &self.attribute_names {
            Some(names) => names.clone(),
            None => self
                .control
                .attribute_names()
                .into_iter()
                .map(AttributeName::from)
                .collect(),
        };

        reporter.enter_context("Attributes");
        let result = attribute_names
            .iter()
            .try_for_each(|attribute_name| self.compare_one(reporter, attribute_name));
        reporter.exit_context();
        result
    }

    fn compare_one(
        &self,
        reporter: &mut impl Reporter,
        attribute_name: &AttributeName,
    ) -> Result<(), FixtureError> {
        let control_value = self.control.attribute(attribute_name.event_name())?;
        let compare_value = self.compare.attribute(attribute_name.entity_name())?;

        reporter.detail(&format!("Control Value: {control_value:?}"));
        reporter.detail(&format!("Compare Value: {compare_value:?}"));
        reporter.test(
            &attribute_name.label(),
            values_equal(control_value, compare_value),
        );
        Ok(())
    }
}

#[cfg(test)]
mod equality_tests {
    use super::*;
    use crate::adapters::tracing_reporter::TracingReporter;
    use rstest::{fixture, rstest};

    #[derive(Debug)]
    struct Deposited {
        account_id: String,
        amount: i64,
    }
    crate::impl_attributes!(Deposited { account_id, amount });

    #[derive(Debug)]
    struct Account {
        id: Option<String>,
        amount: i64,
    }
    crate::impl_attributes!(Account { id, amount });

    #[derive(Debug)]
    struct Converted {
        id: &'static str,
        amount: f64,
    }
    crate::impl_attributes!(Converted { id, amount });

    #[fixture]
    fn deposited() -> Deposited {
        Deposited {
            account_id: "acc-0001".to_string(),
            amount: 10,
        }
    }

    #[fixture]
    fn account() -> Account {
        Account {
            id: Some("acc-0001".to_string()),
            amount: 10,
        }
    }

    #[rstest]
    fn it_should_emit_one_passing_check_per_attribute(deposited: Deposited, account: Account) {
        let mut reporter = TracingReporter::default();
        let names = vec![AttributeName::from(("account_id", "id")), "amount".into()];

        Equality::build(&deposited, &account, Some(names), true)
            .call(&mut reporter)
            .unwrap();

        let report = reporter.into_report();
        assert_eq!(report.labels(), vec!["account_id => id", "amount"]);
        assert!(report.passed());
        assert_eq!(
            report.checks()[0].context,
            vec!["Schema Equality: Deposited, Account", "Attributes"]
        );
    }

    #[rstest]
    fn it_should_check_the_types_unless_ignored(deposited: Deposited, account: Account) {
        let mut reporter = TracingReporter::default();

        Equality::build(&deposited, &account, Some(vec!["amount".into()]), false)
            .call(&mut reporter)
            .unwrap();

        let report = reporter.into_report();
        assert_eq!(report.labels(), vec!["Types are the same", "amount"]);
        assert!(!report.checks()[0].passed);
        assert!(report.checks()[1].passed);
    }

    #[rstest]
    fn it_should_pass_the_type_check_for_the_same_type(deposited: Deposited) {
        let mut reporter = TracingReporter::default();
        Equality::build(&deposited, &deposited, None, false)
            .call(&mut reporter)
            .unwrap();
        assert!(reporter.report().passed());
        assert_eq!(reporter.report().checks().len(), 3);
    }

    #[rstest]
    fn it_should_default_to_every_attribute_of_the_control(deposited: Deposited) {
        let compare = Deposited {
            account_id: "acc-0002".to_string(),
            amount: 10,
        };
        let mut reporter = TracingReporter::default();

        Equality::build(&deposited, &compare, None, true)
            .call(&mut reporter)
            .unwrap();

        let report = reporter.into_report();
        assert_eq!(report.labels(), vec!["account_id", "amount"]);
        assert!(!report.checks()[0].passed);
        assert!(report.checks()[1].passed);
    }

    #[rstest]
    fn it_should_keep_comparing_after_a_mismatch(deposited: Deposited) {
        let stale = Account {
            id: Some("acc-0001".to_string()),
            amount: 0,
        };
        let mut reporter = TracingReporter::default();
        let names = vec!["amount".into(), AttributeName::mapped("account_id", "id")];

        Equality::build(&deposited, &stale, Some(names), true)
            .call(&mut reporter)
            .unwrap();

        let report = reporter.into_report();
        assert_eq!(report.checks().len(), 2);
        assert!(!report.checks()[0].passed);
        assert!(report.checks()[1].passed);
    }

    #[rstest]
    fn it_should_fail_when_the_compare_side_lacks_the_attribute(
        deposited: Deposited,
        account: Account,
    ) {
        let mut reporter = TracingReporter::default();

        let names = vec!["account_id".into()];

        let error = Equality::build(&deposited, &account, Some(names), true)
            .call(&mut reporter)
            .unwrap_err();

        match error {
            FixtureError::MissingAttribute {
                type_name,
                attribute,
            } => {
                assert!(type_name.ends_with("Account"));
                assert_eq!(attribute, "account_id");
            }
            other => panic!("expected MissingAttribute, got {other:?}"),
        }
        assert!(reporter.report().checks().is_empty());
    }

    #[rstest]
    fn it_should_report_values_with_their_debug_form(deposited: Deposited, account: Account) {
        let mut reporter = TracingReporter::default();
        let names = vec![AttributeName::mapped("account_id", "id")];

        Equality::build(&deposited, &account, Some(names), true)
            .call(&mut reporter)
            .unwrap();

        let lines: Vec<&str> = reporter
            .report()
            .details()
            .iter()
            .map(|detail| detail.line.as_str())
            .collect();
        assert!(lines.contains(&"Control Value: \"acc-0001\""));
        assert!(lines.contains(&"Compare Value: Some(\"acc-0001\")"));
    }

    #[rstest]
    fn it_should_fail_the_check_when_the_types_differ(deposited: Deposited) {
        let converted = Converted {
            id: "acc-0001",
            amount: 10.0,
        };
        let mut reporter = TracingReporter::default();
        let names = vec![AttributeName::mapped("account_id", "id"), "amount".into()];

        Equality::build(&deposited, &converted, Some(names), true)
            .call(&mut reporter)
            .unwrap();

        let report = reporter.into_report();
        assert_eq!(report.labels(), vec!["account_id => id", "amount"]);
        assert!(report.checks().iter().all(|check| !check.passed));
    }

    #[rstest]
    fn it_should_give_the_same_outcome_when_repeated(deposited: Deposited, account: Account) {
        let names = vec![AttributeName::mapped("account_id", "id"), "amount".into()];
        let equality = Equality::build(&deposited, &account, Some(names), true);
        let mut first = TracingReporter::default();
        let mut second = TracingReporter::default();

        equality.call(&mut first).unwrap();
        equality.call(&mut second).unwrap();

        assert_eq!(first.into_report(), second.into_report());
    }
}
