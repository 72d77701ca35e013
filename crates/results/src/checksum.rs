// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image checksum comparison against `-expected.checksum` baselines.
//!
//! Only checksums are compared here. When they differ, the actual and
//! expected images are copied next to the checksum artifacts so a pixel
//! diff can be produced by whatever consumes the results directory.

use crate::arguments::ResultArguments;
use crate::engine::{
    ArtifactWriter, BuildTarget, ComparisonEngine, DiffOptions, DriverProcess, SUFFIX_ACTUAL,
    SUFFIX_EXPECTED,
};
use crate::error::ResultsError;
use crate::failure::{TestFailure, Verdict};
use crate::text::read_optional;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Extension of checksum results and baselines.
pub const CHECKSUM_EXTENSION: &str = ".checksum";
/// Extension of image results and baselines.
pub const IMAGE_EXTENSION: &str = ".png";

/// Compares a rendered image's checksum with its baseline.
#[derive(Clone, Debug)]
pub struct ChecksumComparison {
    artifacts: ArtifactWriter,
}

impl ChecksumComparison {
    pub fn new(artifacts: ArtifactWriter) -> Self {
        Self { artifacts }
    }

    /// The driver's hash, else the SHA-256 of the generated image.
    fn actual_checksum(&self, args: &ResultArguments) -> Result<Option<String>, ResultsError> {
        if let Some(hash) = args.content_hash.as_deref().map(str::trim) {
            if !hash.is_empty() {
                return Ok(Some(hash.to_string()));
            }
        }
        match &args.artifact_path {
            Some(path) => {
                let image = std::fs::read(path).map_err(|e| ResultsError::io(path, e))?;
                Ok(Some(hex::encode(Sha256::digest(&image))))
            }
            None => Ok(None),
        }
    }

    fn save_baselines(
        &self,
        test_file: &Path,
        checksum: &str,
        args: &ResultArguments,
    ) -> Result<(), ResultsError> {
        self.artifacts
            .save_baseline(test_file, checksum.as_bytes(), CHECKSUM_EXTENSION)?;
        if let Some(path) = &args.artifact_path {
            let image = std::fs::read(path).map_err(|e| ResultsError::io(path, e))?;
            self.artifacts
                .save_baseline(test_file, &image, IMAGE_EXTENSION)?;
        }
        Ok(())
    }

    /// Copy actual and expected images into the results directory.
    fn copy_images(
        &self,
        test_file: &Path,
        actual: Option<&Path>,
        expected: &Path,
    ) -> Result<(), ResultsError> {
        let copies = [
            (actual, SUFFIX_ACTUAL),
            (Some(expected).filter(|p| p.is_file()), SUFFIX_EXPECTED),
        ];
        for (source, suffix) in copies {
            let Some(source) = source else { continue };
            let dest = self
                .artifacts
                .output_filename(test_file, &format!("{suffix}{IMAGE_EXTENSION}"));
            std::fs::copy(source, &dest).map_err(|e| ResultsError::io(&dest, e))?;
        }
        Ok(())
    }
}

impl ComparisonEngine for ChecksumComparison {
    fn compare(
        &self,
        test_file: &Path,
        _process: &DriverProcess,
        _output: &[u8],
        args: &ResultArguments,
        _target: BuildTarget,
    ) -> Result<Verdict, ResultsError> {
        let Some(actual) = self.actual_checksum(args)? else {
            return Ok(vec![TestFailure::MissingActualChecksum]);
        };

        if args.new_baseline {
            self.save_baselines(test_file, &actual, args)?;
            return Ok(Vec::new());
        }

        let resolver = self.artifacts.context().resolver();
        let platform = self.artifacts.platform();
        let expected_checksum_path =
            resolver.expected_baseline(test_file, platform, CHECKSUM_EXTENSION);
        let expected_image_path = resolver.expected_baseline(test_file, platform, IMAGE_EXTENSION);
        if args.show_sources {
            tracing::info!(
                test = %test_file.display(),
                checksum = %expected_checksum_path.display(),
                image = %expected_image_path.display(),
                "expected image"
            );
        }

        let expected_raw = read_optional(&expected_checksum_path)?;
        let expected = String::from_utf8_lossy(&expected_raw).trim().to_string();

        let failure = if !expected_image_path.is_file() {
            TestFailure::MissingImage
        } else if expected.is_empty() {
            TestFailure::MissingChecksum
        } else if expected != actual {
            TestFailure::ChecksumMismatch {
                expected: expected.clone(),
                actual: actual.clone(),
            }
        } else {
            return Ok(Vec::new());
        };

        self.artifacts.write_results(
            test_file,
            "",
            CHECKSUM_EXTENSION,
            Some(actual.as_bytes()),
            Some(expected.as_bytes()),
            DiffOptions::none(),
        )?;
        self.copy_images(test_file, args.artifact_path.as_deref(), &expected_image_path)?;

        Ok(vec![failure])
    }

    fn artifacts(&self) -> &ArtifactWriter {
        &self.artifacts
    }

    fn name(&self) -> &'static str {
        "checksum"
    }
}

#[cfg(test)]
#[path = "checksum_tests.rs"]
mod tests;
