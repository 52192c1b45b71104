//! Keys recognised in settings documents.
//!
//! Each module lists the keys of one object type; the constants are plain `&str`s meant to be
//! used as [KeyPath](crate::KeyPath) segments:
//!
//! ```
//! use keypath::keys::{self, body};
//! use keypath::KeyPath;
//!
//! let path = KeyPath::from(keys::BODIES) / "Earth" / body::EPHEMERIS / body::ephemeris::TYPE;
//! assert_eq!(path.to_string(), "bodies.Earth.ephemeris.type");
//! ```
//!
//! Every module also exports `ALL`, the list of keys it declares. None of them collides with a
//! [Sentinel](crate::Sentinel).

macro_rules! keys {
    ($($(#[$attr:meta])* $name:ident = $value:literal;)*) => {
        $(
            $(#[$attr])*
            pub const $name: &str = $value;
        )*

        /// Every key declared in this module.
        pub const ALL: &[&str] = &[$($name),*];
    };
}

keys! {
    START_EPOCH = "initialEpoch";
    END_EPOCH = "finalEpoch";
    GLOBAL_FRAME_ORIGIN = "globalFrameOrigin";
    GLOBAL_FRAME_ORIENTATION = "globalFrameOrientation";
    SPICE = "spice";
    BODIES = "bodies";
    PROPAGATORS = "propagators";
    TERMINATION = "termination";
    INTEGRATOR = "integrator";
    EXPORT = "export";
    OPTIONS = "options";
}

pub mod spice {
    keys! {
        KERNELS = "kernels";
        PRELOAD_KERNELS = "preloadEphemeris";
        PRELOAD_OFFSETS = "interpolationOffsets";
        INTERPOLATION_STEP = "interpolationStep";
    }
}

pub mod body {
    keys! {
        USE_DEFAULT_SETTINGS = "useDefaultSettings";
        MASS = "mass";
        REFERENCE_AREA = "referenceArea";
        AERODYNAMICS = "aerodynamics";
        ATMOSPHERE = "atmosphere";
        EPHEMERIS = "ephemeris";
        GRAVITY_FIELD = "gravityField";
        ROTATION_MODEL = "rotationModel";
        SHAPE_MODEL = "shapeModel";
        RADIATION_PRESSURE = "radiationPressure";
        GRAVITY_FIELD_VARIATION = "gravityFieldVariation";
    }

    pub mod aerodynamics {
        keys! {
            COEFFICIENTS_TYPE = "coefficientsType";
            REFERENCE_LENGTH = "referenceLength";
            REFERENCE_AREA = "referenceArea";
            LATERAL_REFERENCE_LENGTH = "lateralReferenceLength";
            MOMENT_REFERENCE_POINT = "momentReferencePoint";
            INDEPENDENT_VARIABLE_NAMES = "independentVariableNames";
            ARE_COEFFICIENTS_IN_AERODYNAMIC_FRAME = "areCoefficientsInAerodynamicFrame";
            ARE_COEFFICIENTS_IN_NEGATIVE_AXIS_DIRECTION = "areCoefficientsInNegativeAxisDirection";
            /// Declared for completeness, control surfaces are not read from settings yet.
            CONTROL_SURFACE_SETTINGS = "controlSurfaceSettings";

            // Constant coefficients.
            DRAG_COEFFICIENT = "dragCoefficient";
            FORCE_COEFFICIENTS = "forceCoefficients";
            MOMENT_COEFFICIENTS = "momentCoefficients";

            // Tabulated coefficients.
            NUMBER_OF_DIMENSIONS = "numberOfDimensions";
            INDEPENDENT_VARIABLES = "independentVariableValues";
            INTERPOLATOR = "interpolator";
            INDEPENDENT_VARIABLE_NAME = "independentVariableName";
        }
    }

    pub mod atmosphere {
        keys! {
            TYPE = "type";
            DENSITY_SCALE_HEIGHT = "densityScaleHeight";
            CONSTANT_TEMPERATURE = "constantTemperature";
            DENSITY_AT_ZERO_ALTITUDE = "densityAtZeroAltitude";
            SPECIFIC_GAS_CONSTANT = "specificGasConstant";
            FILE = "file";
            SPACE_WEATHER_FILE = "spaceWeatherFile";
        }
    }

    /// There is no key for custom state functions, those can't be expressed in a document.
    pub mod ephemeris {
        keys! {
            TYPE = "type";
            FRAME_ORIGIN = "frameOrigin";
            FRAME_ORIENTATION = "frameOrientation";
            MAKE_MULTI_ARC = "makeMultiArc";
            CORRECT_FOR_STELLAR_ABERRATION = "correctForStellarAberration";
            CORRECT_FOR_LIGHT_TIME_ABERRATION = "correctForLightTimeAberration";
            CONVERGE_LIGHT_TIME_ABERRATION = "convergeLightTimeAberration";
            INITIAL_TIME = "initialTime";
            FINAL_TIME = "finalTime";
            TIME_STEP = "timeStep";
            INTERPOLATOR = "interpolator";
            USE_LONG_DOUBLE_STATES = "useLongDoubleStates";
            BODY_IDENTIFIER = "bodyIdentifier";
            USE_CIRCULAR_COPLANAR_APPROXIMATION = "useCircularCoplanarApproximation";
            CONSTANT_STATE = "constantState";
            INITIAL_STATE_IN_KEPLERIAN_ELEMENTS = "initialStateInKeplerianElements";
            EPOCH_OF_INITIAL_STATE = "epochOfInitialState";
            CENTRAL_BODY_GRAVITATIONAL_PARAMETER = "centralBodyGravitationalParameter";
            ROOT_FINDER_ABSOLUTE_TOLERANCE = "rootFinderAbsoluteTolerance";
            ROOT_FINDER_MAXIMUM_NUMBER_OF_ITERATIONS = "rootFinderMaximumNumberOfIterations";
            BODY_STATE_HISTORY = "bodyStateHistory";
        }
    }

    pub mod gravity_field {
        keys! {
            TYPE = "type";
            GRAVITATIONAL_PARAMETER = "gravitationalParameter";
            REFERENCE_RADIUS = "referenceRadius";
            COSINE_COEFFICIENTS = "cosineCoefficients";
            SINE_COEFFICIENTS = "sineCoefficients";
            ASSOCIATED_REFERENCE_FRAME = "associatedReferenceFrame";
            MODEL = "model";
            FILE = "file";
            MAXIMUM_DEGREE = "maximumDegree";
            MAXIMUM_ORDER = "maximumOrder";
            GRAVITATIONAL_PARAMETER_INDEX = "gravitationalParameterIndex";
            REFERENCE_RADIUS_INDEX = "referenceRadiusIndex";
        }
    }

    pub mod rotation_model {
        keys! {
            TYPE = "type";
            ORIGINAL_FRAME = "originalFrame";
            TARGET_FRAME = "targetFrame";
            INITIAL_ORIENTATION = "initialOrientation";
            INITIAL_TIME = "initialTime";
            ROTATION_RATE = "rotationRate";
        }
    }

    pub mod shape_model {
        keys! {
            TYPE = "type";
            RADIUS = "radius";
            EQUATORIAL_RADIUS = "equatorialRadius";
            FLATTENING = "flattening";
        }
    }

    pub mod radiation_pressure {
        keys! {
            TYPE = "type";
            REFERENCE_AREA = "referenceArea";
            RADIATION_PRESSURE_COEFFICIENT = "radiationPressureCoefficient";
            OCCULTING_BODIES = "occultingBodies";
        }
    }

    pub mod gravity_field_variation {
        keys! {
            BODY_DEFORMATION_TYPE = "bodyDeformationType";
            MODEL_INTERPOLATION = "modelInterpolation";
            DEFORMING_BODIES = "deformingBodies";
            LOVE_NUMBERS = "loveNumbers";
            REFERENCE_RADIUS = "referenceRadius";
            COSINE_COEFFICIENT_CORRECTIONS = "cosineCoefficientCorrections";
            SINE_COEFFICIENT_CORRECTIONS = "sineCoefficientCorrections";
            MINIMUM_DEGREE = "minimumDegree";
            MINIMUM_ORDER = "minimumOrder";
        }
    }
}

/// Dependent variables, used by termination conditions and exported results.
pub mod variable {
    keys! {
        TYPE = "type";
        DEPENDENT_VARIABLE_TYPE = "dependentVariableType";
        BODY = "body";
        RELATIVE_TO_BODY = "relativeToBody";
        ACCELERATION_TYPE = "accelerationType";
        BODY_EXERTING_ACCELERATION = "bodyExertingAcceleration";
        TORQUE_TYPE = "torqueType";
        BODY_EXERTING_TORQUE = "bodyExertingTorque";
        BASE_FRAME = "baseFrame";
        TARGET_FRAME = "targetFrame";
        ANGLE = "angle";
    }
}

pub mod propagator {
    keys! {
        INTEGRATED_STATE_TYPE = "integratedStateType";
        INITIAL_STATES = "initialStates";
        TYPE = "type";
        CENTRAL_BODIES = "centralBodies";
        BODIES_TO_PROPAGATE = "bodiesToPropagate";
        ACCELERATIONS = "accelerations";
        MASS_RATE_MODELS = "massRateModels";
        TORQUES = "torques";
    }

    pub mod acceleration {
        keys! {
            TYPE = "type";
            MAXIMUM_DEGREE = "maximumDegree";
            MAXIMUM_ORDER = "maximumOrder";
            MAXIMUM_DEGREE_OF_BODY_EXERTING_ACCELERATION = "maximumDegreeOfBodyExertingAcceleration";
            MAXIMUM_ORDER_OF_BODY_EXERTING_ACCELERATION = "maximumOrderOfBodyExertingAcceleration";
            MAXIMUM_DEGREE_OF_BODY_UNDERGOING_ACCELERATION = "maximumDegreeOfBodyUndergoingAcceleration";
            MAXIMUM_ORDER_OF_BODY_UNDERGOING_ACCELERATION = "maximumOrderOfBodyUndergoingAcceleration";
            MAXIMUM_DEGREE_OF_CENTRAL_BODY = "maximumDegreeOfCentralBody";
            MAXIMUM_ORDER_OF_CENTRAL_BODY = "maximumOrderOfCentralBody";
            CALCULATE_SCHWARZSCHILD_CORRECTION = "calculateSchwarzschildCorrection";
            CALCULATE_LENSE_THIRRING_CORRECTION = "calculateLenseThirringCorrection";
            CALCULATE_DE_SITTER_CORRECTION = "calculateDeSitterCorrection";
            PRIMARY_BODY = "primaryBody";
            CENTRAL_BODY_ANGULAR_MOMENTUM = "centralBodyAngularMomentum";
            CONSTANT_ACCELERATION = "constantAcceleration";
            SINE_ACCELERATION = "sineAcceleration";
            COSINE_ACCELERATION = "cosineAcceleration";
        }

        pub mod thrust {
            keys! {
                DIRECTION = "direction";
                MAGNITUDE = "magnitude";
                DATA_INTERPOLATION = "dataInterpolation";
                SPECIFIC_IMPULSE = "specificImpulse";
                FRAME = "frame";
                CENTRAL_BODY = "centralBody";
            }

            pub mod direction {
                keys! {
                    TYPE = "type";
                    RELATIVE_BODY = "relativeBody";
                    COLINEAR_WITH_VELOCITY = "colinearWithVelocity";
                    TOWARDS_RELATIVE_BODY = "towardsRelativeBody";
                }
            }

            pub mod magnitude {
                keys! {
                    TYPE = "type";
                    ORIGIN_ID = "originID";
                    CONSTANT_MAGNITUDE = "constantMagnitude";
                    SPECIFIC_IMPULSE = "specificImpulse";
                    BODY_FIXED_DIRECTION = "bodyFixedDirection";
                    USE_ALL_ENGINES = "useAllEngines";
                }
            }
        }
    }

    pub mod mass_rate_model {
        keys! {
            TYPE = "type";
            USE_ALL_THRUST_MODELS = "useAllThrustModels";
            ASSOCIATED_THRUST_SOURCE = "associatedThrustSource";
        }
    }

    pub mod torque {
        keys! {
            TYPE = "type";
        }
    }
}

pub mod termination {
    keys! {
        ANY_OF = "anyOf";
        ALL_OF = "allOf";
        VARIABLE = "variable";
        LOWER_LIMIT = "lowerLimit";
        UPPER_LIMIT = "upperLimit";
    }
}

pub mod integrator {
    keys! {
        TYPE = "type";
        INITIAL_TIME = "initialTime";
        STEP_SIZE = "stepSize";
        INITIAL_STEP_SIZE = "initialStepSize";
        SAVE_FREQUENCY = "saveFrequency";
        RUNGE_KUTTA_COEFFICIENT_SET = "rungeKuttaCoefficientSet";
        MINIMUM_STEP_SIZE = "minimumStepSize";
        MAXIMUM_STEP_SIZE = "maximumStepSize";
        RELATIVE_ERROR_TOLERANCE = "relativeErrorTolerance";
        ABSOLUTE_ERROR_TOLERANCE = "absoluteErrorTolerance";
        SAFETY_FACTOR_FOR_NEXT_STEP_SIZE = "safetyFactorForNextStepSize";
        MAXIMUM_FACTOR_INCREASE_FOR_NEXT_STEP_SIZE = "maximumFactorIncreaseForNextStepSize";
        MINIMUM_FACTOR_DECREASE_FOR_NEXT_STEP_SIZE = "minimumFactorDecreaseForNextStepSize";
    }
}

pub mod interpolation {
    pub mod data_map {
        keys! {
            MAP = "map";
            FILE = "file";
            INDEPENDENT_VARIABLE_VALUES = "independentVariableValues";
            DEPENDENT_VARIABLE_VALUES = "dependentVariableValues";
            DEPENDENT_VARIABLE_FIRST_DERIVATIVE_VALUES = "dependentVariableFirstDerivativeValues";
        }
    }

    pub mod interpolator {
        keys! {
            TYPE = "type";
            LOOKUP_SCHEME = "lookupScheme";
            USE_LONG_DOUBLE_TIME_STEP = "useLongDoubleTimeStep";
            ORDER = "order";
            BOUNDARY_HANDLING = "boundaryHandling";
        }
    }

    pub mod data_interpolation {
        keys! {
            DATA = "data";
            INTERPOLATOR = "interpolator";
        }
    }

    pub mod model_interpolation {
        keys! {
            INITIAL_TIME = "initialTime";
            FINAL_TIME = "finalTime";
            TIME_STEP = "timeStep";
            INTERPOLATOR = "interpolator";
        }
    }
}

pub mod export {
    keys! {
        FILE = "file";
        VARIABLES = "variables";
        HEADER = "header";
        EPOCHS_IN_FIRST_COLUMN = "epochsInFirstColumn";
        ONLY_INITIAL_STEP = "onlyInitialStep";
        ONLY_FINAL_STEP = "onlyFinalStep";
        NUMERICAL_PRECISION = "numericalPrecision";
    }
}

pub mod options {
    keys! {
        NOTIFY_ON_PROPAGATION_START = "notifyOnPropagationStart";
        NOTIFY_ON_PROPAGATION_TERMINATION = "notifyOnPropagationTermination";
        PRINT_INTERVAL = "printInterval";
        DEFAULT_VALUE_USED_FOR_MISSING_KEY = "defaultValueUsedForMissingKey";
        UNUSED_KEY = "unusedKey";
        UNIDIMENSIONAL_ARRAY_INFERENCE = "unidimensionalArrayInference";
        POPULATED_FILE = "fullSettingsFile";
        TAG_OUTPUT_FILES_IF_PROPAGATION_FAILS = "tagOutputFilesIfPropagationFails";
    }
}

#[cfg(all(test, feature = "path"))]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::path::{is_sentinel, Segment};

    fn catalogue() -> Vec<&'static [&'static str]> {
        vec![
            ALL,
            spice::ALL,
            body::ALL,
            body::aerodynamics::ALL,
            body::atmosphere::ALL,
            body::ephemeris::ALL,
            body::gravity_field::ALL,
            body::rotation_model::ALL,
            body::shape_model::ALL,
            body::radiation_pressure::ALL,
            body::gravity_field_variation::ALL,
            variable::ALL,
            propagator::ALL,
            propagator::acceleration::ALL,
            propagator::acceleration::thrust::ALL,
            propagator::acceleration::thrust::direction::ALL,
            propagator::acceleration::thrust::magnitude::ALL,
            propagator::mass_rate_model::ALL,
            propagator::torque::ALL,
            termination::ALL,
            integrator::ALL,
            interpolation::data_map::ALL,
            interpolation::interpolator::ALL,
            interpolation::data_interpolation::ALL,
            interpolation::model_interpolation::ALL,
            export::ALL,
            options::ALL,
        ]
    }

    #[test]
    fn no_key_is_a_sentinel() {
        for key in catalogue().into_iter().flatten() {
            assert!(!is_sentinel(key), "{key} is reserved");
        }
    }

    #[test]
    fn keys_are_plain_literals() {
        for key in catalogue().into_iter().flatten() {
            assert_eq!(Segment::classify(key), Segment::Key(key));
            assert!(!key.contains('.'), "{key} would print ambiguously");
        }
    }

    #[test]
    fn keys_are_unique_per_object() {
        for keys in catalogue() {
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(unique.len(), keys.len());
        }
    }
}
