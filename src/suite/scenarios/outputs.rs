use crate::capability::{ConfigSection, SignalType, TimeReference};
use crate::device::DeviceSession;
use crate::error::ConsoleError;
use crate::pages::navigation::Navigator;
use crate::pages::outputs::OutputsConfigPage;
use crate::suite::catalog::Scenario;
use crate::suite::context::ScenarioContext;
use crate::suite::suite_model::{Fixture, Requirement};

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            id: "outputs.count",
            group: "outputs",
            title: "Rendered outputs match the model",
            requires: Requirement::Section(ConfigSection::Outputs),
            fixture: Fixture::Unlocked,
            run: count,
        },
        Scenario {
            id: "outputs.signal_options",
            group: "outputs",
            title: "Each output offers the signal types of its bank",
            requires: Requirement::Section(ConfigSection::Outputs),
            fixture: Fixture::Unlocked,
            run: signal_options,
        },
        Scenario {
            id: "outputs.time_reference",
            group: "outputs",
            title: "Time reference radios follow the selected signal",
            requires: Requirement::Section(ConfigSection::Outputs),
            fixture: Fixture::Unlocked,
            run: time_reference,
        },
    ]
}

fn open(session: &mut DeviceSession) -> Result<OutputsConfigPage<'_>, ConsoleError> {
    let profile = session.profile()?;
    Navigator::new(session.page()).goto_section(ConfigSection::Outputs)?;
    let mut page = OutputsConfigPage::new(session.page(), profile);
    page.verify_loaded()?;
    Ok(page)
}

fn count(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    ctx.check_eq("output count", profile.max_outputs, page.output_count()?);
    Ok(())
}

fn signal_options(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;
    for channel in 1..=profile.max_outputs {
        let expected = profile.output_signal_types(channel)?;
        let shown = page.signal_options(channel)?;
        ctx.check_eq(format!("output {} signal types", channel), expected.to_vec(), shown);
    }
    Ok(())
}

fn expect_references(
    ctx: &mut ScenarioContext,
    page: &mut OutputsConfigPage<'_>,
    channel: u8,
    signal: SignalType,
    expected: &[TimeReference],
) -> Result<(), ConsoleError> {
    page.select_signal(channel, signal)?;
    for reference in [TimeReference::Utc, TimeReference::Local] {
        let visible = page.time_reference_visible(channel, reference)?;
        ctx.check_eq(
            format!("output {} {} shows {}", channel, signal, reference.as_str()),
            expected.contains(&reference),
            visible,
        );
    }
    Ok(())
}

fn time_reference(ctx: &mut ScenarioContext, session: &mut DeviceSession) -> Result<(), ConsoleError> {
    let profile = session.profile()?;
    let mut page = open(session)?;

    let irig = SignalType::IrigB(122);
    if profile.validate_signal(1, irig) {
        expect_references(ctx, &mut page, 1, irig, profile.expected_time_references(irig))?;
    }

    let Some(channel) = (1..=profile.max_outputs).find(|&c| profile.validate_signal(c, SignalType::Pps)) else {
        ctx.skip("no output offers PPS");
        return Ok(());
    };
    expect_references(
        ctx,
        &mut page,
        channel,
        SignalType::Pps,
        profile.expected_time_references(SignalType::Pps),
    )
}
