use crate::workflows::assessment::{AssessmentOptions, FallbackRows, ReportMode};

/// A representative site-photo response: environment description, a
/// four-column risk table, a five-column checklist, and recommendations.
pub(super) const SITE_PHOTO_REPORT: &str = "\
## 통합 작업 환경 설명

철골 구조물 설치가 진행 중인 신축 공사 현장으로, 2층 슬래브 위에서 용접 작업이 이루어지고 있다.
현장 우측에 이동식 크레인이 자재를 인양 중이며, 하부에 작업자 동선이 형성되어 있다.

## 1. 현장 전체 잠재 위험요인 분석 및 위험성 감소대책

| 번호 | 잠재 위험요인 | 잠재 위험요인 설명 | 위험성 감소대책 |
|------|-------------|------------------|----------------|
| 1 | 추락 위험 | 고소 작업 구간에 안전난간이 설치되어 있지 않음 | ① 안전난간 설치 ② 안전모 및 안전대 착용 ③ 추락방호망 설치 ④ 작업발판 고정 |
| 2 | 낙하물 위험 | 인양 작업 구간 하부 출입 통제가 확인되지 않음 | ① 출입통제 구역 설정 ② 낙하물 방지망 설치 ③ 신호수 배치 ④ 작업 전 TBM 실시 |

## 2. SGR 체크리스트 항목별 통합 체크 결과

| 번호 | 대분류 | 소분류 | 준수여부 | 세부 내용 |
|------|--------|--------|----------|-----------|
| 1 | SGR 준수 | 모든 작업자는 작업조건에 맞는 안전보호구를 착용한다. | X | 안전모 미착용 작업자 2명 확인 |
| 2 | SGR 준수 | 작업 전 TBM 시행 및 결과 등록 | 알수없음 | 사진만으로는 시행 여부 확인 불가 |
| 3 | 화기 작업 | 화기 작업-소화기 및 비상시 행동요령 숙지 | O | 용접 구간 인근 소화기 비치 확인 |

## 3. 현장 전체 통합 추가 권장사항

우천 시 고소 작업을 중지하고, 크레인 인양 반경에 대한 출입 통제를 상시 유지할 것을 권장한다.
";

/// The free-text prompt variant's heading set.
pub(super) const WORK_DESCRIPTION_REPORT: &str = "\
## 작업 내용 분석

맨홀 내부 케이블 포설 작업으로, 밀폐공간 진입이 필요하다.

## 위험성 평가 표 (위험요인과 감소대책)

| 번호 | 잠재 위험요인 | 잠재 위험요인 설명 | 위험성 감소대책 |
|------|-------------|------------------|----------------|
| 1 | 산소 결핍 | 밀폐공간 내 산소농도 저하 우려 | ① 산소농도 측정 ② 환기 실시 ③ 감시인 배치 ④ 송기마스크 비치 |

## 추가 안전 조치

작업 전 가스농도 측정 기록을 보존한다.

## 작업 전 체크리스트

| 번호 | 대분류 | 소분류 | 준수여부 | 세부 내용 |
| 1 | SGR 준수 | 밀폐공간 작업 시 산소/유해가스 농도 측정 | 해당없음 | 측정 장비 반입 예정 |
";

pub(super) fn options(mode: ReportMode) -> AssessmentOptions {
    AssessmentOptions {
        mode,
        fallback: FallbackRows::standard(),
        baseline_coverage: true,
    }
}

pub(super) fn options_without_coverage(mode: ReportMode) -> AssessmentOptions {
    AssessmentOptions {
        baseline_coverage: false,
        ..options(mode)
    }
}
