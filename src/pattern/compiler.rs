//! Configuration-to-pattern compiler.
//!
//! Users describe a pattern as a list of steps with the time each step
//! *starts*. The stepper needs the time each step *ends*, so the compiler
//! shifts every time value back onto the preceding step. Step 0 is the cycle
//! entry point and is pinned to offset 0. The `end` step never expires.

use super::FormatError;
use crate::config::{DirectionConfig, StepConfig};
use crate::light::{
    Light, LightDisplay, LightSet, Step, StepLabel, MAX_LIGHTS_IN_SET, MAX_STEPS_IN_PATTERN,
    NEVER_EXPIRES,
};
use crate::table::{Direction, LightSetTable, INT_DIRECTIONS};
use serde_json::Value;

/// Compile light-kind tokens into a light array.
///
/// Unrecognised tokens become unused slots. Configured lights must be
/// contiguous from index 0.
pub fn compile_lights(tokens: &[Value]) -> Result<[Light; MAX_LIGHTS_IN_SET], FormatError> {
    if tokens.len() > MAX_LIGHTS_IN_SET {
        return Err(FormatError::TooManyLights {
            max: MAX_LIGHTS_IN_SET,
        });
    }

    let mut lights = [Light::unused(); MAX_LIGHTS_IN_SET];
    let mut gap = false;
    for (index, token) in tokens.iter().enumerate() {
        let token = token
            .as_str()
            .ok_or(FormatError::LightNotString { index })?;
        let display = LightDisplay::from_token(token);
        match display {
            LightDisplay::Unused => gap = true,
            _ if gap => return Err(FormatError::DiscontiguousLights { index }),
            _ => {}
        }
        lights[index] = Light::new(display);
    }

    Ok(lights)
}

/// Compile user timing entries into a step array with expiration offsets.
///
/// An empty list yields an all-unused pattern, which disables the direction.
///
/// ```rust
/// use signalbox::config::StepConfig;
/// use signalbox::light::{StepLabel, NEVER_EXPIRES};
/// use signalbox::pattern::compile_steps;
///
/// let steps = compile_steps(&[
///     StepConfig::new("LPSR", 2000),
///     StepConfig::new("LUSR", 3000),
///     StepConfig::new("end", 4000),
/// ])
/// .unwrap();
///
/// assert_eq!(steps[0].offset_ms, 0);
/// assert_eq!(steps[1].offset_ms, 4000);
/// assert_eq!(steps[2].offset_ms, NEVER_EXPIRES);
/// assert_eq!(steps[3].label, StepLabel::Unused);
/// ```
pub fn compile_steps(entries: &[StepConfig]) -> Result<[Step; MAX_STEPS_IN_PATTERN], FormatError> {
    if entries.len() > MAX_STEPS_IN_PATTERN {
        return Err(FormatError::TooManySteps {
            max: MAX_STEPS_IN_PATTERN,
        });
    }

    let mut steps = [Step::unused(); MAX_STEPS_IN_PATTERN];
    let mut ended = false;
    for (index, entry) in entries.iter().enumerate() {
        if ended {
            return Err(FormatError::StepsAfterEnd { index });
        }

        let label = parse_label(index, &entry.state)?;
        let time = parse_time(index, &entry.time)?;

        steps[index] = Step::new(label, 0);
        // The previous step ends when this one starts; step 0 stays pinned.
        if index >= 2 {
            steps[index - 1].offset_ms = time;
        }
        if label == StepLabel::End {
            steps[index].offset_ms = NEVER_EXPIRES;
            ended = true;
        }
    }

    if !entries.is_empty() && !ended {
        return Err(FormatError::MissingEnd);
    }

    Ok(steps)
}

/// Compile every record into `table`.
///
/// A direction that fails is reset to unused before the error is returned.
/// Directions compiled earlier are left as they are.
pub fn compile_into(
    table: &mut LightSetTable,
    records: &[DirectionConfig],
) -> Result<(), FormatError> {
    let mut seen = [false; INT_DIRECTIONS];
    for record in records {
        let direction = parse_direction(&record.direction)?;
        if std::mem::replace(&mut seen[direction.index()], true) {
            return Err(FormatError::DuplicateDirection(direction));
        }

        match compile_set(record) {
            Ok(set) => {
                tracing::debug!(%direction, "compiled light set");
                table.set(direction, set);
            }
            Err(source) => {
                table.set(direction, LightSet::unused());
                return Err(FormatError::InDirection {
                    direction,
                    source: Box::new(source),
                });
            }
        }
    }
    Ok(())
}

/// Compile a full configuration. Directions not listed stay unused.
pub fn compile_config(records: &[DirectionConfig]) -> Result<LightSetTable, FormatError> {
    let mut table = LightSetTable::unused();
    compile_into(&mut table, records)?;
    Ok(table)
}

fn compile_set(record: &DirectionConfig) -> Result<LightSet, FormatError> {
    let lights = compile_lights(&record.lights)?;
    let steps = compile_steps(&record.steps)?;
    Ok(LightSet::new(lights, steps))
}

fn parse_direction(value: &Value) -> Result<Direction, FormatError> {
    let name = value.as_str().ok_or(FormatError::DirectionNotString)?;
    Direction::from_name(name).ok_or_else(|| FormatError::UnknownDirection(name.to_string()))
}

fn parse_label(index: usize, value: &Value) -> Result<StepLabel, FormatError> {
    let token = value
        .as_str()
        .ok_or(FormatError::LabelNotString { index })?;
    StepLabel::from_token(token).ok_or_else(|| FormatError::UnknownLabel {
        index,
        token: token.to_string(),
    })
}

/// Times must stay below [`NEVER_EXPIRES`], which only `end` may carry.
fn parse_time(index: usize, value: &Value) -> Result<u64, FormatError> {
    if let Some(time) = value.as_u64() {
        return match time {
            NEVER_EXPIRES => Err(FormatError::TimeNotNumber { index }),
            time => Ok(time),
        };
    }
    match value.as_f64() {
        Some(time) if time.is_finite() && time >= 0.0 && time < NEVER_EXPIRES as f64 => {
            Ok(time as u64)
        }
        _ => Err(FormatError::TimeNotNumber { index }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::LightColor;

    fn entries(steps: &[(&str, u64)]) -> Vec<StepConfig> {
        steps
            .iter()
            .map(|(state, time)| StepConfig::new(state, *time))
            .collect()
    }

    #[test]
    fn offsets_are_remapped_to_expirations() {
        let steps = compile_steps(&entries(&[
            ("LPSR", 2000),
            ("LUSR", 3000),
            ("end", 4000),
        ]))
        .unwrap();

        let labels: Vec<_> = steps.iter().take(3).map(|s| s.label).collect();
        let offsets: Vec<_> = steps.iter().take(3).map(|s| s.offset_ms).collect();
        assert_eq!(labels, [StepLabel::Lpsr, StepLabel::Lusr, StepLabel::End]);
        assert_eq!(offsets, [0, 4000, NEVER_EXPIRES]);
        assert!(steps[3..].iter().all(|s| *s == Step::unused()));
    }

    #[test]
    fn middle_steps_expire_when_successor_starts() {
        let steps = compile_steps(&entries(&[
            ("LPSR", 0),
            ("LYSR", 3000),
            ("LUSG", 5000),
            ("LYSY", 7000),
            ("LRSR", 9000),
            ("end", 11000),
        ]))
        .unwrap();

        let offsets: Vec<_> = steps.iter().take(6).map(|s| s.offset_ms).collect();
        assert_eq!(offsets, [0, 5000, 7000, 9000, 11000, NEVER_EXPIRES]);
    }

    #[test]
    fn exactly_one_step_never_expires() {
        let steps = compile_steps(&entries(&[("LPSG", 0), ("LRSR", 10), ("end", 20)])).unwrap();
        let never = steps.iter().filter(|s| s.offset_ms == NEVER_EXPIRES).count();
        assert_eq!(never, 1);
    }

    #[test]
    fn empty_step_list_disables_direction() {
        let steps = compile_steps(&[]).unwrap();
        assert!(steps.iter().all(|s| s.label == StepLabel::Unused));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = compile_steps(&entries(&[("LPSR", 0), ("BLUE", 10), ("end", 20)])).unwrap_err();
        assert_eq!(
            err,
            FormatError::UnknownLabel {
                index: 1,
                token: "BLUE".to_string()
            }
        );
    }

    #[test]
    fn unused_is_not_a_configurable_label() {
        let err = compile_steps(&entries(&[("unused", 0), ("end", 10)])).unwrap_err();
        assert!(matches!(err, FormatError::UnknownLabel { index: 0, .. }));
    }

    #[test]
    fn mistyped_fields_are_rejected() {
        let bad_state = [StepConfig {
            state: Value::from(7),
            time: Value::from(0),
        }];
        assert_eq!(
            compile_steps(&bad_state),
            Err(FormatError::LabelNotString { index: 0 })
        );

        let bad_time = [StepConfig {
            state: Value::from("end"),
            time: Value::from("later"),
        }];
        assert_eq!(
            compile_steps(&bad_time),
            Err(FormatError::TimeNotNumber { index: 0 })
        );

        let negative = [StepConfig {
            state: Value::from("end"),
            time: Value::from(-5),
        }];
        assert_eq!(
            compile_steps(&negative),
            Err(FormatError::TimeNotNumber { index: 0 })
        );
    }

    #[test]
    fn oversized_times_are_rejected() {
        for time in [Value::from(u64::MAX), Value::from(1e30)] {
            let steps = [
                StepConfig::new("LPSG", 0),
                StepConfig::new("LRSR", 10),
                StepConfig {
                    state: Value::from("end"),
                    time,
                },
            ];
            assert_eq!(
                compile_steps(&steps),
                Err(FormatError::TimeNotNumber { index: 2 })
            );
        }

        let steps = compile_steps(&entries(&[("LPSG", 0), ("LRSR", 10), ("end", u64::MAX - 1)]))
            .unwrap();
        assert_eq!(steps[1].offset_ms, u64::MAX - 1);
    }

    #[test]
    fn step_capacity_is_enforced() {
        let mut list: Vec<_> = (0..MAX_STEPS_IN_PATTERN).map(|i| ("LRSR", i as u64)).collect();
        list.push(("end", 100));
        assert_eq!(
            compile_steps(&entries(&list)),
            Err(FormatError::TooManySteps {
                max: MAX_STEPS_IN_PATTERN
            })
        );
    }

    #[test]
    fn pattern_must_end_exactly_once() {
        assert_eq!(
            compile_steps(&entries(&[("LPSR", 0), ("LRSR", 10)])),
            Err(FormatError::MissingEnd)
        );
        assert_eq!(
            compile_steps(&entries(&[("LPSR", 0), ("end", 10), ("LRSR", 20)])),
            Err(FormatError::StepsAfterEnd { index: 2 })
        );
    }

    #[test]
    fn lights_map_tokens_and_start_red() {
        let lights = compile_lights(&[Value::from("<"), Value::from("O"), Value::from("?")]).unwrap();
        assert_eq!(lights[0].display, LightDisplay::Arrow);
        assert_eq!(lights[1].display, LightDisplay::Solid);
        assert_eq!(lights[2].display, LightDisplay::Unused);
        assert!(lights.iter().all(|l| l.color == LightColor::Red));
    }

    #[test]
    fn light_capacity_and_types_are_enforced() {
        let six: Vec<_> = (0..6).map(|_| Value::from("O")).collect();
        assert_eq!(
            compile_lights(&six),
            Err(FormatError::TooManyLights {
                max: MAX_LIGHTS_IN_SET
            })
        );
        assert_eq!(
            compile_lights(&[Value::from("O"), Value::Null]),
            Err(FormatError::LightNotString { index: 1 })
        );
    }

    #[test]
    fn lights_must_be_contiguous() {
        let err = compile_lights(&[Value::from("O"), Value::from("x"), Value::from("<")]).unwrap_err();
        assert_eq!(err, FormatError::DiscontiguousLights { index: 2 });
    }

    #[test]
    fn failed_direction_is_reset_and_others_kept() {
        let mut table = LightSetTable::unused();
        let good = DirectionConfig::new("north", &["<", "O"], &[("LPSR", 0), ("end", 10)]);
        let mut bad = DirectionConfig::new("east", &["O"], &[("LPSR", 0), ("end", 10)]);
        compile_into(&mut table, &[good.clone(), bad.clone()]).unwrap();
        assert!(!table.get(Direction::East).is_unused());

        bad.steps[0].state = Value::from("nope");
        let err = compile_into(&mut table, &[good, bad]).unwrap_err();

        assert!(matches!(
            err,
            FormatError::InDirection {
                direction: Direction::East,
                ..
            }
        ));
        assert!(table.get(Direction::East).is_unused());
        assert!(!table.get(Direction::North).is_unused());
    }

    #[test]
    fn directions_are_validated() {
        let unknown = DirectionConfig::new("up", &[], &[]);
        assert_eq!(
            compile_config(&[unknown]),
            Err(FormatError::UnknownDirection("up".to_string()))
        );

        let mut numeric = DirectionConfig::new("north", &[], &[]);
        numeric.direction = Value::from(1);
        assert_eq!(
            compile_config(&[numeric]),
            Err(FormatError::DirectionNotString)
        );

        let twice = DirectionConfig::new("West", &[], &[]);
        assert_eq!(
            compile_config(&[twice.clone(), twice]),
            Err(FormatError::DuplicateDirection(Direction::West))
        );
    }

    #[test]
    fn unlisted_directions_stay_unused() {
        let table = compile_config(&[DirectionConfig::new(
            "south",
            &["O"],
            &[("LRSG", 0), ("LRSY", 100), ("end", 200)],
        )])
        .unwrap();

        assert!(!table.get(Direction::South).is_unused());
        assert!(table.get(Direction::North).is_unused());
        assert!(table.get(Direction::East).is_unused());
        assert!(table.get(Direction::West).is_unused());
    }

    #[test]
    fn errors_name_their_direction() {
        let record = DirectionConfig::new("north", &["O"], &[("LPSR", 0)]);
        let err = compile_config(&[record]).unwrap_err();
        assert_eq!(err.to_string(), "north: pattern has no terminating 'end' step");
    }
}
