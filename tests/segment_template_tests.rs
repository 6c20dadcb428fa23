use dyncmd::error::BindError;
use dyncmd::method::{CommandMethod, MethodSpec, ParameterSpec, ReturnShape, ValueShape};
use dyncmd::segment::{
    CommandMethodVerifier, CommandSegment, CommandSegmentFactory, CommandSegmentTemplate,
};

fn method(spec: MethodSpec) -> CommandMethod {
    CommandMethod::new(spec).unwrap()
}

#[test]
fn template_lays_out_keywords_then_placeholders() {
    let method = method(
        MethodSpec::builder("client_setname")
            .keyword("CLIENT")
            .keyword("SETNAME")
            .value_parameter("name")
            .returns(ReturnShape::Plain(ValueShape::Unit))
            .build(),
    );

    let template = CommandSegmentFactory::create(&method);
    assert_eq!(
        template.segments(),
        &[
            CommandSegment::Literal("CLIENT".to_string()),
            CommandSegment::Literal("SETNAME".to_string()),
            CommandSegment::Placeholder(0),
        ]
    );
}

#[test]
fn timeout_parameters_never_become_placeholders() {
    let method = method(
        MethodSpec::builder("brpop")
            .keyword("BRPOP")
            .key_parameter("key")
            .timeout_parameter("timeout")
            .returns(ReturnShape::Plain(ValueShape::OptionalValue))
            .build(),
    );

    let template = CommandSegmentFactory::create(&method);
    assert_eq!(
        template.segments(),
        &[
            CommandSegment::Literal("BRPOP".to_string()),
            CommandSegment::Placeholder(0),
        ]
    );
    // The generated template always satisfies its own verifier.
    CommandMethodVerifier::validate(&template, &method).unwrap();
}

#[test]
fn generated_templates_pass_verification() {
    let method = method(
        MethodSpec::builder("mset")
            .keyword("MSET")
            .key_parameter("key")
            .value_parameter("value")
            .returns(ReturnShape::Plain(ValueShape::Unit))
            .build(),
    );

    let template = CommandSegmentFactory::create(&method);
    CommandMethodVerifier::validate(&template, &method).unwrap();
}

fn expect_malformed(template: CommandSegmentTemplate, method: &CommandMethod) -> String {
    match CommandMethodVerifier::validate(&template, method).unwrap_err() {
        BindError::MalformedTemplate { detail, .. } => detail,
        other => panic!("unexpected bind error: {other:?}"),
    }
}

#[test]
fn template_must_open_with_a_keyword() {
    let m = method(
        MethodSpec::builder("bare")
            .key_parameter("key")
            .returns(ReturnShape::Plain(ValueShape::Value))
            .build(),
    );
    let template = CommandSegmentTemplate::new(vec![CommandSegment::Placeholder(0)]);

    let detail = expect_malformed(template, &m);
    assert!(detail.contains("keyword"));
}

#[test]
fn out_of_range_placeholders_are_rejected() {
    let m = method(
        MethodSpec::builder("get")
            .keyword("GET")
            .key_parameter("key")
            .returns(ReturnShape::Plain(ValueShape::Value))
            .build(),
    );
    let template = CommandSegmentTemplate::new(vec![
        CommandSegment::Literal("GET".to_string()),
        CommandSegment::Placeholder(0),
        CommandSegment::Placeholder(7),
    ]);

    let detail = expect_malformed(template, &m);
    assert!(detail.contains("position 7"));
}

#[test]
fn timeout_placeholders_are_rejected() {
    let m = method(
        MethodSpec::builder("brpop")
            .keyword("BRPOP")
            .key_parameter("key")
            .timeout_parameter("timeout")
            .returns(ReturnShape::Plain(ValueShape::OptionalValue))
            .build(),
    );
    let template = CommandSegmentTemplate::new(vec![
        CommandSegment::Literal("BRPOP".to_string()),
        CommandSegment::Placeholder(0),
        CommandSegment::Placeholder(1),
    ]);

    let detail = expect_malformed(template, &m);
    assert!(detail.contains("timeout"));
}

#[test]
fn every_wire_parameter_is_referenced_exactly_once() {
    let m = method(
        MethodSpec::builder("set")
            .keyword("SET")
            .key_parameter("key")
            .value_parameter("value")
            .returns(ReturnShape::Plain(ValueShape::Unit))
            .build(),
    );

    // Missing reference for `value`.
    let missing = CommandSegmentTemplate::new(vec![
        CommandSegment::Literal("SET".to_string()),
        CommandSegment::Placeholder(0),
    ]);
    assert!(expect_malformed(missing, &m).contains("no matching placeholder"));

    // `key` referenced twice.
    let doubled = CommandSegmentTemplate::new(vec![
        CommandSegment::Literal("SET".to_string()),
        CommandSegment::Placeholder(0),
        CommandSegment::Placeholder(0),
        CommandSegment::Placeholder(1),
    ]);
    assert!(expect_malformed(doubled, &m).contains("2 times"));
}

#[test]
fn variadic_parameter_must_hold_the_final_placeholder() {
    let m = method(
        MethodSpec::builder("bad_variadic")
            .keyword("BAD")
            .parameter(ParameterSpec::key("keys").variadic())
            .value_parameter("tail")
            .returns(ReturnShape::Plain(ValueShape::Unit))
            .build(),
    );

    let template = CommandSegmentFactory::create(&m);
    let detail = expect_malformed(template, &m);
    assert!(detail.contains("final placeholder"));
}
